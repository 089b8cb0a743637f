use anyhow::{Context, Result};
use hero_sieve_core::config::SelectorConfig;
use hero_sieve_core::model::HeroRecord;
use hero_sieve_core::roster::source::{load_roster, DecodedRoster, RosterSource};

/// Load the roster named by `config`, failing with a readable message.
pub fn open_roster(config: &SelectorConfig) -> Result<DecodedRoster> {
    let source = config.source();
    let decoded = load_roster(&source, config.duplicate_ids)
        .with_context(|| format!("Failed to load hero roster from {}", source.describe()))?;
    log::info!(
        "loaded {} hero(es) from {} ({} quarantined)",
        decoded.roster.len(),
        source.describe(),
        decoded.quarantined.len()
    );
    Ok(decoded)
}

/// One-line human summary of a hero.
pub fn hero_line(hero: &HeroRecord) -> String {
    format!(
        "#{} {} [{}*, {}, {}]",
        hero.id(),
        hero.name(),
        hero.stars(),
        hero.role(),
        hero.faction()
    )
}
