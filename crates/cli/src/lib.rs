use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hero_sieve_core::config::{load_config, SelectorConfig};

pub mod commands;

/// Canonicalize the base path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(base: &str) -> Result<PathBuf> {
    let path = Path::new(base);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // The directory may not exist yet; anchor it to the cwd instead.
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Build the selector config for a command.
///
/// An explicit `--config` file is loaded first; an explicit `--base` then
/// overrides whatever base the file named.
pub fn resolve_config(base: Option<&str>, config: Option<&str>) -> Result<SelectorConfig> {
    let mut resolved = match config {
        Some(path) => load_config(Path::new(path))?,
        None => SelectorConfig::default(),
    };
    if let Some(base) = base {
        resolved.base = canonicalize_or_current(base)?.to_string_lossy().to_string();
    } else if config.is_none() {
        resolved.base = canonicalize_or_current(".")?.to_string_lossy().to_string();
    }
    log::debug!("roster base resolved to {}", resolved.base);
    Ok(resolved)
}

/// Initialize stderr logging, honouring `RUST_LOG` and defaulting to `warn`.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A second init (e.g. from tests) is harmless.
    env_logger::Builder::from_env(env).format_timestamp_secs().try_init().ok();
}
