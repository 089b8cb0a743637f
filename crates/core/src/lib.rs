//! hero-sieve-core
//!
//! Core library for smart-text hero filtering and selection.
//!
//! This crate defines the hero model, the smart-text parser and filter
//! criteria, the roster with its JSON data-source boundary, selection
//! resolution, and the event-driven session that ties them together.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, web bindings, etc.).

pub mod config;
pub mod model;
pub mod roster;
pub mod selection;
pub mod session;
pub mod sieve;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
