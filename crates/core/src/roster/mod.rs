//! The hero roster: an ordered, id-indexed collection of heroes.
//!
//! A roster is built once from an externally supplied list and replaced
//! wholesale on refresh. Nothing here mutates a record after construction.

pub mod source;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{HeroId, HeroRecord};
use crate::sieve::FilterCriteria;

/// What to do when two records share an id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Fail construction with [`RosterError::DuplicateId`].
    #[default]
    Reject,
    /// Later records overwrite earlier ones, keeping the earlier position.
    LastWins,
}

/// Error type for roster construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("duplicate hero id {id} in roster")]
    DuplicateId { id: HeroId },
}

/// Ordered collection of heroes with O(1) lookup by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroRoster {
    heroes: Vec<HeroRecord>,
    index: HashMap<HeroId, usize>,
}

impl HeroRoster {
    /// Roster with no heroes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a roster, rejecting duplicate ids.
    pub fn new(records: impl IntoIterator<Item = HeroRecord>) -> Result<Self, RosterError> {
        Self::with_policy(records, DuplicateIdPolicy::Reject)
    }

    /// Build a roster, resolving duplicate ids according to `policy`.
    pub fn with_policy(
        records: impl IntoIterator<Item = HeroRecord>,
        policy: DuplicateIdPolicy,
    ) -> Result<Self, RosterError> {
        let mut heroes: Vec<HeroRecord> = Vec::new();
        let mut index = HashMap::new();

        for record in records {
            let id = record.id();
            match (index.get(&id).copied(), policy) {
                (None, _) => {
                    index.insert(id, heroes.len());
                    heroes.push(record);
                }
                (Some(_), DuplicateIdPolicy::Reject) => {
                    return Err(RosterError::DuplicateId { id });
                }
                (Some(pos), DuplicateIdPolicy::LastWins) => {
                    log::warn!("hero id {id} appears more than once; keeping the later record");
                    heroes[pos] = record;
                }
            }
        }

        Ok(Self { heroes, index })
    }

    pub fn find_by_id(&self, id: HeroId) -> Option<&HeroRecord> {
        self.index.get(&id).map(|&pos| &self.heroes[pos])
    }

    pub fn contains(&self, id: HeroId) -> bool {
        self.index.contains_key(&id)
    }

    /// Heroes in roster order.
    pub fn heroes(&self) -> &[HeroRecord] {
        &self.heroes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeroRecord> {
        self.heroes.iter()
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Every hero matching `criteria`, in roster order.
    pub fn filtered_heroes(&self, criteria: &FilterCriteria) -> Vec<&HeroRecord> {
        self.heroes.iter().filter(|hero| criteria.matches(hero)).collect()
    }

    /// The heroes matching `criteria` as a roster of their own.
    pub fn filtered(&self, criteria: &FilterCriteria) -> HeroRoster {
        let heroes: Vec<HeroRecord> =
            self.filtered_heroes(criteria).into_iter().cloned().collect();
        let index = heroes.iter().enumerate().map(|(pos, hero)| (hero.id(), pos)).collect();
        HeroRoster { heroes, index }
    }
}

impl<'a> IntoIterator for &'a HeroRoster {
    type Item = &'a HeroRecord;
    type IntoIter = std::slice::Iter<'a, HeroRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.heroes.iter()
    }
}
