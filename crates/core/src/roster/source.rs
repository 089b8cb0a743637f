//! Roster data sources and the strict JSON decoding boundary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::model::HeroRecord;
use crate::roster::{DuplicateIdPolicy, HeroRoster, RosterError};

/// File name of the roster snapshot inside a base directory.
pub const ROSTER_FILE_NAME: &str = "heroes.json";

/// Failure to obtain a usable roster snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read roster from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("roster JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roster JSON must be an array of heroes")]
    NotAnArray,

    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// A roster element that failed validation and was left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quarantined {
    /// Position of the element in the source array.
    pub index: usize,
    pub reason: String,
}

/// Result of decoding a roster payload.
#[derive(Debug, Clone)]
pub struct DecodedRoster {
    pub roster: HeroRoster,
    pub quarantined: Vec<Quarantined>,
}

/// Something that can produce a raw roster payload.
pub trait RosterSource {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Read the raw UTF-8 JSON payload.
    fn read(&self) -> Result<String, SourceError>;
}

/// Reads `<base>/heroes.json` from the filesystem.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    base: PathBuf,
}

impl DirectorySource {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self { base: base.as_ref().to_path_buf() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Full path of the roster file.
    pub fn roster_path(&self) -> PathBuf {
        self.base.join(ROSTER_FILE_NAME)
    }
}

impl RosterSource for DirectorySource {
    fn describe(&self) -> String {
        self.roster_path().display().to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        let path = self.roster_path();
        fs::read_to_string(&path).map_err(|source| SourceError::Io { path, source })
    }
}

/// In-memory payload; handy for frontends that fetch the JSON themselves.
#[derive(Debug, Clone)]
pub struct StaticSource {
    payload: String,
}

impl StaticSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }
}

impl RosterSource for StaticSource {
    fn describe(&self) -> String {
        "<static payload>".to_string()
    }

    fn read(&self) -> Result<String, SourceError> {
        Ok(self.payload.clone())
    }
}

/// Decode a JSON array of heroes.
///
/// Elements that fail the schema are quarantined and logged rather than
/// failing the whole payload. A payload that is not valid JSON, or not an
/// array, is an error. Duplicate ids are handled according to `policy`.
pub fn decode_roster(json: &str, policy: DuplicateIdPolicy) -> Result<DecodedRoster, SourceError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(elements) = value else {
        return Err(SourceError::NotAnArray);
    };

    let mut records = Vec::with_capacity(elements.len());
    let mut quarantined = Vec::new();
    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<HeroRecord>(element) {
            Ok(record) => records.push(record),
            Err(err) => {
                log::warn!("quarantining roster entry #{index}: {err}");
                quarantined.push(Quarantined { index, reason: err.to_string() });
            }
        }
    }

    let roster = HeroRoster::with_policy(records, policy)?;
    Ok(DecodedRoster { roster, quarantined })
}

/// Read and decode a roster from `source`.
pub fn load_roster(
    source: &dyn RosterSource,
    policy: DuplicateIdPolicy,
) -> Result<DecodedRoster, SourceError> {
    let payload = source.read()?;
    let decoded = decode_roster(&payload, policy)?;
    log::debug!(
        "loaded {} hero(es) from {} ({} quarantined)",
        decoded.roster.len(),
        source.describe(),
        decoded.quarantined.len()
    );
    Ok(decoded)
}
