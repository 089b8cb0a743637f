use std::fs;

use hero_sieve::{canonicalize_or_current, init_logging, resolve_config};
use hero_sieve_core::roster::DuplicateIdPolicy;
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_handles_dot_and_relative_paths() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let dot = canonicalize_or_current(".").expect("canonicalize").canonicalize().expect("canon");
    let nested = canonicalize_or_current("nested").expect("canonicalize nested");
    let missing = canonicalize_or_current("not-there-yet").expect("anchor missing");

    std::env::set_current_dir(original).expect("restore cwd");

    assert_eq!(dot, tmp.path().canonicalize().expect("canon tmp"));
    assert_eq!(nested, subdir.canonicalize().expect("canonicalize subdir"));
    assert!(missing.ends_with("not-there-yet"));
    assert!(missing.is_absolute());
}

#[test]
fn resolve_config_prefers_explicit_base_over_config_file() {
    let tmp = tempdir().unwrap();
    let other = tempdir().unwrap();
    let config_path = tmp.path().join("hero-sieve.json");
    fs::write(&config_path, r#"{"base": "roster", "duplicate_ids": "last_wins"}"#).unwrap();
    let config_arg = config_path.to_string_lossy().to_string();

    let from_file = resolve_config(None, Some(&config_arg)).unwrap();
    assert_eq!(from_file.base_path(), tmp.path().join("roster"));
    assert_eq!(from_file.duplicate_ids, DuplicateIdPolicy::LastWins);

    let base_arg = other.path().to_string_lossy().to_string();
    let overridden = resolve_config(Some(&base_arg), Some(&config_arg)).unwrap();
    assert_eq!(overridden.base_path(), other.path().canonicalize().unwrap());
    assert_eq!(overridden.duplicate_ids, DuplicateIdPolicy::LastWins);
}

#[test]
fn init_logging_tolerates_repeated_calls() {
    init_logging();
    init_logging();
    log::info!("logging initialised twice");
}
