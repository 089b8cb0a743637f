use anyhow::Result;
use hero_sieve_core::config::SelectorConfig;
use hero_sieve_core::model::{HeroId, HeroRecord};
use hero_sieve_core::roster::source::Quarantined;
use hero_sieve_core::selection::CandidateShape;
use hero_sieve_core::session::{Event, SelectionHooks, Session};
use serde::Serialize;

use crate::commands::{hero_line, open_roster};
use crate::resolve_config;

#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub smart_text: String,
    pub shape: CandidateShape,
    pub candidates: Vec<HeroRecord>,
    pub selected: Option<HeroRecord>,
    pub ignored: Vec<String>,
    pub quarantined: Vec<Quarantined>,
}

/// Load the roster, apply `text`, optionally click `select`, and report the result.
pub fn build_filter_report(
    config: &SelectorConfig,
    text: &str,
    select: Option<u32>,
) -> Result<FilterReport> {
    let decoded = open_roster(config)?;

    let mut session = Session::new(config, SelectionHooks::new());
    session.dispatch(Event::RosterRefreshed(decoded.roster));
    session.dispatch(Event::SmartTextChanged(text.to_string()));
    if let Some(id) = select {
        session.dispatch(Event::HeroClicked(HeroId(id)));
    }

    let snapshot = session.snapshot();
    Ok(FilterReport {
        smart_text: snapshot.smart_text().to_string(),
        shape: snapshot.shape(),
        candidates: snapshot.candidates().to_vec(),
        selected: snapshot.selected().cloned(),
        ignored: snapshot.criteria().ignored().to_vec(),
        quarantined: decoded.quarantined,
    })
}

/// Filter the roster under `base` with smart text and print candidates.
pub fn filter_command(
    base: Option<&str>,
    config: Option<&str>,
    text: &str,
    select: Option<u32>,
    json: bool,
) -> Result<()> {
    let config = resolve_config(base, config)?;
    let report = build_filter_report(&config, text, select)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Smart text: {:?}", report.smart_text);
    if !report.ignored.is_empty() {
        println!("Ignored tokens: {}", report.ignored.join(" "));
    }
    if !report.quarantined.is_empty() {
        println!("Quarantined roster entries: {}", report.quarantined.len());
    }
    println!("Candidates ({}):", report.candidates.len());
    if report.candidates.is_empty() {
        println!("  (none)");
    }
    let selected_id = report.selected.as_ref().map(HeroRecord::id);
    for hero in &report.candidates {
        let marker = if Some(hero.id()) == selected_id { "*" } else { "-" };
        println!("  {marker} {}", hero_line(hero));
    }
    match &report.selected {
        Some(hero) => println!("Selected: {}", hero_line(hero)),
        None => println!("Selected: (none)"),
    }

    Ok(())
}
