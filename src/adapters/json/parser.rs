//! JSON parser for scenario documents
//!
//! Handles reading and deserializing the four documents of a scenario.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::core::error::ScenarioError;
use crate::core::models::{Edge, Extract, StatusReport};

/// Build list as stored on disk; the root entry may have a `null` parent
pub type BuildDocument = Vec<(String, Option<String>)>;

/// Edit list as stored on disk
pub type EditsDocument = Vec<Edge>;

/// Extract as stored on disk
pub type ExtractDocument = Extract;

/// Expected statuses as stored on disk
pub type ExpectedDocument = StatusReport;

/// Read and deserialize one JSON document
///
/// # Errors
///
/// Returns `MissingFile` if the file does not exist, `Io` if it cannot be
/// read and `Json` if it does not match the expected shape.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ScenarioError> {
    if !path.is_file() {
        return Err(ScenarioError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("read {} ({} bytes)", path.display(), content.len());

    serde_json::from_str(&content).map_err(|source| ScenarioError::Json {
        path: path.to_path_buf(),
        source,
    })
}
