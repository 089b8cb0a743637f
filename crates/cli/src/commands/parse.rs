use anyhow::Result;
use hero_sieve_core::sieve::{parse, Comparison, Field, Predicate};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PredicateInfo {
    pub field: Field,
    pub comparison: Comparison,
    pub predicate: Predicate,
}

#[derive(Debug, Serialize)]
pub struct ParseReport {
    pub text: String,
    pub predicates: Vec<PredicateInfo>,
    pub ignored: Vec<String>,
}

pub fn build_parse_report(text: &str) -> ParseReport {
    let criteria = parse(text);
    let predicates = criteria
        .predicates()
        .iter()
        .map(|p| PredicateInfo { field: p.field(), comparison: p.comparison(), predicate: p.clone() })
        .collect();
    ParseReport {
        text: criteria.text().to_string(),
        predicates,
        ignored: criteria.ignored().to_vec(),
    }
}

/// Show how smart text is interpreted.
pub fn parse_command(text: &str, json: bool) -> Result<()> {
    let report = build_parse_report(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Smart text: {:?}", report.text);
    println!("Predicates ({}):", report.predicates.len());
    if report.predicates.is_empty() {
        println!("  (none, matches every hero)");
    }
    for info in &report.predicates {
        println!("  - {}", describe(&info.predicate));
    }
    if !report.ignored.is_empty() {
        println!("Ignored tokens: {}", report.ignored.join(" "));
    }

    Ok(())
}

fn describe(predicate: &Predicate) -> String {
    match predicate {
        Predicate::NameContains(needle) => format!("name contains '{needle}'"),
        Predicate::Role(role) => format!("role is {role}"),
        Predicate::Faction(faction) => format!("faction is {faction}"),
        Predicate::Stars(range) if range.is_exact() => format!("stars = {}", range.min()),
        Predicate::Stars(range) => format!("stars in {}..={}", range.min(), range.max()),
    }
}
