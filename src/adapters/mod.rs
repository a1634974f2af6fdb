//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - Scenario fixture directories of JSON documents

pub mod json;
