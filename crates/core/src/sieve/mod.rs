//! Filter criteria applied to a hero roster.
//!
//! A `FilterCriteria` is the structured form of a smart-text query: a list of
//! predicates plus the original text so a frontend can echo exactly what was
//! typed. Predicates on the same field are OR-ed together; different fields
//! are AND-ed.

pub mod parser;

use serde::Serialize;

use crate::model::{Faction, HeroRecord, Role, MAX_STARS, MIN_STARS};

pub use parser::parse;

/// Hero field a predicate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Role,
    Faction,
    Stars,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Role, Field::Faction, Field::Stars];
}

/// How a predicate compares its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Substring,
    Equality,
    Range,
}

/// Inclusive star range, always within `MIN_STARS..=MAX_STARS` and non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRange {
    min: u8,
    max: u8,
}

impl StarRange {
    /// Build a range, rejecting bounds outside 1..=10 or `min > max`.
    pub fn new(min: u8, max: u8) -> Option<Self> {
        if min < MIN_STARS || max > MAX_STARS || min > max {
            return None;
        }
        Some(Self { min, max })
    }

    /// Range matching a single star count.
    pub fn exactly(stars: u8) -> Option<Self> {
        Self::new(stars, stars)
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, stars: u8) -> bool {
        (self.min..=self.max).contains(&stars)
    }
}

/// A single test against one hero field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Predicate {
    /// Case-insensitive substring of the hero name. Stored lowercased.
    NameContains(String),
    Role(Role),
    Faction(Faction),
    Stars(StarRange),
}

impl Predicate {
    /// Name predicate; the needle is lowercased so matching is case-insensitive.
    pub fn name_contains(needle: &str) -> Self {
        Predicate::NameContains(needle.to_lowercase())
    }

    pub fn field(&self) -> Field {
        match self {
            Predicate::NameContains(_) => Field::Name,
            Predicate::Role(_) => Field::Role,
            Predicate::Faction(_) => Field::Faction,
            Predicate::Stars(_) => Field::Stars,
        }
    }

    pub fn comparison(&self) -> Comparison {
        match self {
            Predicate::NameContains(_) => Comparison::Substring,
            Predicate::Role(_) | Predicate::Faction(_) => Comparison::Equality,
            Predicate::Stars(range) if range.is_exact() => Comparison::Equality,
            Predicate::Stars(_) => Comparison::Range,
        }
    }

    pub fn matches(&self, hero: &HeroRecord) -> bool {
        match self {
            Predicate::NameContains(needle) => hero.name().to_lowercase().contains(needle.as_str()),
            Predicate::Role(role) => hero.role() == *role,
            Predicate::Faction(faction) => hero.faction() == *faction,
            Predicate::Stars(range) => range.contains(hero.stars()),
        }
    }
}

/// Immutable set of predicates derived from smart text.
///
/// Use [`FilterCriteria::with`] to derive a new value; nothing mutates an
/// existing instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    text: String,
    predicates: Vec<Predicate>,
    ignored: Vec<String>,
}

impl FilterCriteria {
    /// Criteria that matches every hero.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_predicates(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Self { text: String::new(), predicates: predicates.into_iter().collect(), ignored: vec![] }
    }

    pub(crate) fn from_parts(text: String, predicates: Vec<Predicate>, ignored: Vec<String>) -> Self {
        Self { text, predicates, ignored }
    }

    /// Return a copy with one more predicate.
    pub fn with(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// The smart text this criteria was parsed from, verbatim.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Tokens that were not understood and did not contribute to filtering.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// True when no predicate restricts the roster.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// AND across fields, OR within a field.
    pub fn matches(&self, hero: &HeroRecord) -> bool {
        Field::ALL.into_iter().all(|field| {
            let mut on_field = self.predicates.iter().filter(|p| p.field() == field).peekable();
            on_field.peek().is_none() || on_field.any(|p| p.matches(hero))
        })
    }
}
