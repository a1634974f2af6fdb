//! JSON-based scenario source
//!
//! Implements `ScenarioSource` over numbered fixture directories.
//!
//! - [`parser`] - Read and deserialize scenario documents
//! - [`loader`] - `ScenarioSource` implementation

pub mod loader;
pub mod parser;

pub use loader::JsonScenarioLoader;
pub use parser::load_document;
