use anyhow::Result;
use hero_sieve_core::model::{Faction, Role};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FactionInfo {
    pub index: usize,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TagsReport {
    pub roles: Vec<&'static str>,
    pub factions: Vec<FactionInfo>,
}

pub fn known_tags() -> TagsReport {
    TagsReport {
        roles: Role::ALL.iter().map(|r| r.as_str()).collect(),
        factions: Faction::ALL
            .iter()
            .map(|f| FactionInfo { index: f.index(), name: f.as_str() })
            .collect(),
    }
}

/// List the roles and factions smart text understands.
pub fn tags_command(json: bool) -> Result<()> {
    let report = known_tags();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Roles (role:<name>):");
    for role in &report.roles {
        println!("- {role}");
    }
    println!("Factions (faction:<name>):");
    for faction in &report.factions {
        println!("- {} (index {})", faction.name, faction.index);
    }

    Ok(())
}
