//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (the filesystem, fixture formats).
//!
//! Implementations live in the `adapters` module.

mod scenario_source;

pub use scenario_source::ScenarioSource;
