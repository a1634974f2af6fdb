//! Core domain logic for taxostage
//!
//! This module contains pure business logic with no I/O dependencies.
//! Loading scenarios from disk is abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Status, Node, Scenario, options)
//! - `services/` - Taxonomy database, evaluation, scenario replay
//! - `ports/` - Trait definitions for external dependencies
//! - `error` - Error types shared by the layers above

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::{ScenarioError, TaxonomyError};
