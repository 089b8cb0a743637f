//! Selection resolution.
//!
//! Decides which hero is "selected" given the current candidate set, the
//! last explicit click, and whether the set has collapsed to a single hero.

use serde::Serialize;

use crate::model::{HeroId, HeroRecord};

/// Size class of a candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateShape {
    Empty,
    Singleton,
    Multiple,
}

impl CandidateShape {
    pub fn of(candidates: &[HeroRecord]) -> Self {
        match candidates.len() {
            0 => CandidateShape::Empty,
            1 => CandidateShape::Singleton,
            _ => CandidateShape::Multiple,
        }
    }
}

/// The visible selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(HeroRecord),
}

impl Selection {
    pub fn hero(&self) -> Option<&HeroRecord> {
        match self {
            Selection::Selected(hero) => Some(hero),
            Selection::Unselected => None,
        }
    }

    pub fn id(&self) -> Option<HeroId> {
        self.hero().map(HeroRecord::id)
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// Explicit choice plus the resolved, visible selection.
///
/// `explicit` survives candidate-set changes: while several candidates
/// remain, the explicitly clicked hero stays selected as long as it is one of
/// them, and comes back if a later filter re-admits it. An auto-resolved
/// singleton is not sticky: it never sets `explicit`, so widening the filter
/// back to several candidates leaves nothing selected. `current` is always a
/// member of the candidate set it was last resolved against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    explicit: Option<HeroId>,
    current: Selection,
}

impl SelectionState {
    pub fn unselected() -> Self {
        Self::default()
    }

    /// Hero last chosen by an explicit click, if any.
    pub fn explicit(&self) -> Option<HeroId> {
        self.explicit
    }

    pub fn current(&self) -> &Selection {
        &self.current
    }

    pub fn selected(&self) -> Option<&HeroRecord> {
        self.current.hero()
    }

    /// Apply a click on hero `id`.
    ///
    /// Overrides the selection whatever the candidate count; a click on a hero
    /// that is not a candidate leaves the state untouched.
    pub fn click(&self, id: HeroId, candidates: &[HeroRecord]) -> SelectionState {
        match candidates.iter().find(|hero| hero.id() == id) {
            Some(hero) => SelectionState {
                explicit: Some(id),
                current: Selection::Selected(hero.clone()),
            },
            None => {
                log::debug!("click on hero {id} ignored: not among current candidates");
                self.clone()
            }
        }
    }

    /// Re-resolve against a new candidate set.
    pub fn resolve(&self, candidates: &[HeroRecord]) -> SelectionState {
        let current = match CandidateShape::of(candidates) {
            CandidateShape::Empty => Selection::Unselected,
            CandidateShape::Singleton => {
                candidates.first().cloned().map(Selection::Selected).unwrap_or_default()
            }
            CandidateShape::Multiple => self
                .explicit
                .and_then(|id| candidates.iter().find(|hero| hero.id() == id))
                .map(|hero| Selection::Selected(hero.clone()))
                .unwrap_or_default(),
        };
        SelectionState { explicit: self.explicit, current }
    }
}
