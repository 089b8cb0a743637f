//! Core data model for heroes.
//!
//! A `HeroRecord` is an immutable, validated value. Every construction path
//! (direct or through serde) runs the same checks, so the rest of the crate
//! never sees a hero with a missing name or an out-of-range star count.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest star count a hero can have.
pub const MIN_STARS: u8 = 1;

/// Highest star count a hero can have.
pub const MAX_STARS: u8 = 10;

/// Unique, positive hero identifier.
///
/// Only serialized; ids are read through [`HeroRecord`] so they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HeroId(pub u32);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for HeroId {
    fn from(value: u32) -> Self {
        HeroId(value)
    }
}

/// Combat role of a hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Tank,
    Warrior,
    Mage,
    Support,
    Ranger,
    Assassin,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 6] =
        [Role::Tank, Role::Warrior, Role::Mage, Role::Support, Role::Ranger, Role::Assassin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Warrior => "warrior",
            Role::Mage => "mage",
            Role::Support => "support",
            Role::Ranger => "ranger",
            Role::Assassin => "assassin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = HeroValidationError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == wanted)
            .ok_or_else(|| HeroValidationError::UnknownRole(s.to_string()))
    }
}

/// Faction a hero belongs to.
///
/// The declaration order is significant: upstream data may refer to a faction
/// by its zero-based index into [`Faction::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Light,
    Dark,
    Fire,
    Water,
    Earth,
    Wind,
}

impl Faction {
    /// Every faction, in index order.
    pub const ALL: [Faction; 6] =
        [Faction::Light, Faction::Dark, Faction::Fire, Faction::Water, Faction::Earth, Faction::Wind];

    pub fn as_str(self) -> &'static str {
        match self {
            Faction::Light => "light",
            Faction::Dark => "dark",
            Faction::Fire => "fire",
            Faction::Water => "water",
            Faction::Earth => "earth",
            Faction::Wind => "wind",
        }
    }

    /// Zero-based index of this faction in [`Faction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a faction by its zero-based index.
    pub fn from_index(index: i64) -> Result<Self, HeroValidationError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Faction::ALL.get(i).copied())
            .ok_or(HeroValidationError::FactionIndexOutOfRange(index))
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faction {
    type Err = HeroValidationError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Faction::ALL
            .into_iter()
            .find(|faction| faction.as_str() == wanted)
            .ok_or_else(|| HeroValidationError::UnknownFaction(s.to_string()))
    }
}

/// Reasons a hero fails schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeroValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    #[error("hero id must be a positive integer, got {0}")]
    InvalidId(i64),
    #[error("hero name must not be empty")]
    EmptyName,
    #[error("stars must be within 1..=10, got {0}")]
    StarsOutOfRange(i64),
    #[error("unknown role '{0}'")]
    UnknownRole(String),
    #[error("unknown faction '{0}'")]
    UnknownFaction(String),
    #[error("faction index {0} is out of range")]
    FactionIndexOutOfRange(i64),
}

/// One hero of the roster.
///
/// Immutable once constructed; fields are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHero")]
pub struct HeroRecord {
    id: HeroId,
    name: String,
    stars: u8,
    role: Role,
    faction: Faction,
}

impl HeroRecord {
    /// Build a validated hero record.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        stars: u8,
        role: Role,
        faction: Faction,
    ) -> Result<Self, HeroValidationError> {
        if id == 0 {
            return Err(HeroValidationError::InvalidId(0));
        }
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HeroValidationError::EmptyName);
        }
        if !(MIN_STARS..=MAX_STARS).contains(&stars) {
            return Err(HeroValidationError::StarsOutOfRange(i64::from(stars)));
        }
        Ok(Self { id: HeroId(id), name, stars, role, faction })
    }

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn faction(&self) -> Faction {
        self.faction
    }

    /// Heroes of 3 to 5 stars can be collected as shards.
    pub fn is_shardable(&self) -> bool {
        (3..=5).contains(&self.stars)
    }
}

/// Faction as it appears on the wire: a name or a zero-based index.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum FactionRepr {
    Index(i64),
    Name(String),
}

/// Loosely-typed hero as found in JSON; validated into a `HeroRecord`.
#[derive(Debug, Clone, Deserialize)]
struct RawHero {
    id: Option<i64>,
    name: Option<String>,
    stars: Option<i64>,
    role: Option<String>,
    faction: Option<FactionRepr>,
}

impl TryFrom<RawHero> for HeroRecord {
    type Error = HeroValidationError;

    fn try_from(raw: RawHero) -> Result<Self, Self::Error> {
        let id = raw.id.ok_or(HeroValidationError::MissingField("id"))?;
        let id = u32::try_from(id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or(HeroValidationError::InvalidId(id))?;
        let name = raw.name.ok_or(HeroValidationError::MissingField("name"))?;
        let stars = raw.stars.ok_or(HeroValidationError::MissingField("stars"))?;
        let stars = u8::try_from(stars).map_err(|_| HeroValidationError::StarsOutOfRange(stars))?;
        let role: Role = raw.role.ok_or(HeroValidationError::MissingField("role"))?.parse()?;
        let faction = match raw.faction.ok_or(HeroValidationError::MissingField("faction"))? {
            FactionRepr::Index(index) => Faction::from_index(index)?,
            FactionRepr::Name(name) => name.parse()?,
        };
        HeroRecord::new(id, name, stars, role, faction)
    }
}
