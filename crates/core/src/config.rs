use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::roster::source::DirectorySource;
use crate::roster::DuplicateIdPolicy;

fn default_base() -> String {
    ".".to_string()
}

/// Serializable configuration for a hero selector.
///
/// Usually lives next to the roster as `hero-sieve.json` or `hero-sieve.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Directory holding `heroes.json` (relative paths resolve against the
    /// config file's directory when loaded through [`load_config`]).
    #[serde(default = "default_base")]
    pub base: String,
    /// How to treat duplicate hero ids in the roster.
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { base: default_base(), duplicate_ids: DuplicateIdPolicy::default() }
    }
}

impl SelectorConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), ..Self::default() }
    }

    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    pub fn base_path(&self) -> PathBuf {
        PathBuf::from(&self.base)
    }

    /// Roster source rooted at `base`.
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(self.base_path())
    }
}

/// Load a selector config from JSON or YAML (chosen by file extension).
///
/// A relative `base` is resolved against the directory containing the file.
pub fn load_config(path: &Path) -> Result<SelectorConfig> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read selector config at {}", path.display()))?;
    let mut config: SelectorConfig = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_slice(&bytes).context("Failed to parse selector config JSON")?
    } else {
        serde_yaml::from_slice(&bytes).context("Failed to parse selector config YAML")?
    };

    let base = Path::new(&config.base);
    if base.is_relative() {
        if let Some(dir) = path.parent() {
            config.base = dir.join(base).to_string_lossy().to_string();
        }
    }
    Ok(config)
}
