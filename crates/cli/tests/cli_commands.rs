use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const ROSTER: &str = include_str!("fixtures/heroes.json");

fn roster_dir() -> TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("heroes.json"), ROSTER).expect("write roster");
    dir
}

/// Running without a subcommand should fail with usage help.
#[test]
fn missing_subcommand_fails() {
    cargo_bin_cmd!("hero-sieve").assert().failure();
}

/// filter with a singleton match prints the auto-selected hero.
#[test]
fn filter_prints_auto_selection() {
    let dir = roster_dir();
    cargo_bin_cmd!("hero-sieve")
        .arg("filter")
        .arg("--base")
        .arg(dir.path())
        .arg("--text")
        .arg("Ajax")
        .assert()
        .success()
        .stdout(predicate::str::contains("Candidates (1):"))
        .stdout(predicate::str::contains("Selected: #1 Ajax [5*, tank, light]"));
}

/// filter --json emits a machine-readable report.
#[test]
fn filter_json_reports_candidates_and_selection() {
    let dir = roster_dir();
    let output = cargo_bin_cmd!("hero-sieve")
        .arg("filter")
        .arg("--base")
        .arg(dir.path())
        .arg("--text")
        .arg("role:mage")
        .arg("--select")
        .arg("2")
        .arg("--json")
        .output()
        .expect("run filter");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["shape"], "multiple");
    assert_eq!(report["candidates"].as_array().unwrap().len(), 2);
    assert_eq!(report["selected"]["name"], "Borin");
    assert_eq!(report["selected"]["faction"], "dark");
    assert_eq!(report["quarantined"][0]["index"], 4);
}

/// filter without --base uses the current directory.
#[test]
fn filter_defaults_to_current_directory() {
    let dir = roster_dir();
    cargo_bin_cmd!("hero-sieve")
        .current_dir(dir.path())
        .arg("filter")
        .arg("--text")
        .arg("s:>=7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cassia"));
}

/// filter fails (non-zero exit) when there is no roster.
#[test]
fn filter_fails_when_roster_missing() {
    let dir = tempdir().expect("tempdir");
    cargo_bin_cmd!("hero-sieve")
        .arg("filter")
        .arg("--base")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load hero roster"));
}

#[test]
fn parse_describes_tokens() {
    cargo_bin_cmd!("hero-sieve")
        .arg("parse")
        .arg("--text")
        .arg("aj role:tank 3-5* nope:x")
        .assert()
        .success()
        .stdout(predicate::str::contains("name contains 'aj'"))
        .stdout(predicate::str::contains("role is tank"))
        .stdout(predicate::str::contains("stars in 3..=5"))
        .stdout(predicate::str::contains("Ignored tokens: nope:x"));
}

#[test]
fn session_replays_script_from_stdin() {
    let dir = roster_dir();
    cargo_bin_cmd!("hero-sieve")
        .arg("session")
        .arg("--base")
        .arg(dir.path())
        .write_stdin("text dax\nclick 4\ntext\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> text dax"))
        .stdout(predicate::str::contains("hook: select 4"))
        .stdout(predicate::str::contains("selected: #4 Dax [4*, ranger, fire]"));
}

#[test]
fn session_json_emits_one_line_per_step() {
    let dir = roster_dir();
    let script = dir.path().join("events.txt");
    fs::write(&script, "text borin\nrefresh\n").unwrap();

    let output = cargo_bin_cmd!("hero-sieve")
        .arg("session")
        .arg("--base")
        .arg(dir.path())
        .arg("--script")
        .arg(&script)
        .arg("--json")
        .output()
        .expect("run session");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> =
        stdout.lines().map(|l| serde_json::from_str(l).expect("json line")).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["notifications"][0], "select 2");
    assert_eq!(lines[2]["selected"]["id"], 2);
}

#[test]
fn tags_lists_roles_and_factions() {
    cargo_bin_cmd!("hero-sieve")
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("- assassin"))
        .stdout(predicate::str::contains("- wind (index 5)"));
}
