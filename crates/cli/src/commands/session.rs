use std::cell::RefCell;
use std::fs;
use std::io::Read;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use hero_sieve_core::config::SelectorConfig;
use hero_sieve_core::model::{HeroId, HeroRecord};
use hero_sieve_core::session::{Event, SelectionHooks, Session};
use serde::Serialize;

use crate::commands::hero_line;
use crate::resolve_config;

/// One line of an event script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Text(String),
    Click(u32),
    Refresh,
}

/// State after one script step.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: String,
    pub smart_text: String,
    pub candidates: Vec<u32>,
    pub selected: Option<HeroRecord>,
    /// Hook notifications fired by this step, in order.
    pub notifications: Vec<String>,
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// `text` keeps everything after the first space verbatim, so `text` on its
/// own clears the smart text.
pub fn parse_script_line(line: &str) -> Result<Option<ScriptStep>> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = trimmed.trim_start().split_once(' ').unwrap_or((trimmed.trim_start(), ""));
    match verb {
        "text" => Ok(Some(ScriptStep::Text(rest.to_string()))),
        "click" => {
            let id = rest
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid hero id in script line '{trimmed}'"))?;
            Ok(Some(ScriptStep::Click(id)))
        }
        "refresh" => Ok(Some(ScriptStep::Refresh)),
        other => Err(anyhow!("Unknown script command '{}'. Allowed: text, click, refresh", other)),
    }
}

/// Replay `script` against a live session over the roster named by `config`.
///
/// The roster is loaded once up front (reported as the first step); a failed
/// load is logged and the session carries on with what it has.
pub fn run_session_script(config: &SelectorConfig, script: &str) -> Result<Vec<StepReport>> {
    let steps = script
        .lines()
        .map(parse_script_line)
        .filter_map(Result::transpose)
        .collect::<Result<Vec<_>>>()?;

    let notifications: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let on_select = Rc::clone(&notifications);
    let on_unset = Rc::clone(&notifications);
    let hooks = SelectionHooks::new()
        .on_select(move |hero| on_select.borrow_mut().push(format!("select {}", hero.id())))
        .on_unset(move || on_unset.borrow_mut().push("unset".to_string()));

    let mut session = Session::new(config, hooks);
    let source = config.source();
    let mut reports = Vec::with_capacity(steps.len() + 1);

    session.refresh(&source);
    reports.push(step_report("refresh", &session, &notifications));

    for step in steps {
        let label = match &step {
            ScriptStep::Text(text) => {
                session.dispatch(Event::SmartTextChanged(text.clone()));
                format!("text {text}")
            }
            ScriptStep::Click(id) => {
                session.dispatch(Event::HeroClicked(HeroId(*id)));
                format!("click {id}")
            }
            ScriptStep::Refresh => {
                session.refresh(&source);
                "refresh".to_string()
            }
        };
        reports.push(step_report(&label, &session, &notifications));
    }

    Ok(reports)
}

fn step_report(label: &str, session: &Session, notifications: &RefCell<Vec<String>>) -> StepReport {
    let snapshot = session.snapshot();
    StepReport {
        step: label.trim_end().to_string(),
        smart_text: snapshot.smart_text().to_string(),
        candidates: snapshot.candidates().iter().map(|h| h.id().0).collect(),
        selected: snapshot.selected().cloned(),
        notifications: notifications.borrow_mut().drain(..).collect(),
    }
}

/// Replay an event script from `script` (or stdin) and print each state.
pub fn session_command(
    base: Option<&str>,
    config: Option<&str>,
    script: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = resolve_config(base, config)?;
    let body = match script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read session script at {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read script from stdin")?;
            buf
        }
    };

    let reports = run_session_script(&config, &body)?;

    if json {
        for report in &reports {
            println!("{}", serde_json::to_string(report)?);
        }
        return Ok(());
    }

    for report in &reports {
        println!("> {}", report.step);
        for note in &report.notifications {
            println!("  hook: {note}");
        }
        println!("  candidates: {}", report.candidates.len());
        match &report.selected {
            Some(hero) => println!("  selected: {}", hero_line(hero)),
            None => println!("  selected: (none)"),
        }
    }

    Ok(())
}
