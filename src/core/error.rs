//! Errors raised by the taxonomy core and scenario loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while growing or querying a taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// A pair referenced a parent that is not in the taxonomy yet
    #[error("unknown parent '{parent}' for class '{child}'")]
    UnknownParent {
        /// The class being inserted
        child: String,
        /// The missing parent
        parent: String,
    },

    /// A class name is already taken
    #[error("class '{0}' already exists")]
    DuplicateName(String),

    /// `add_extract` was called twice
    #[error("an extract is already attached")]
    ExtractAlreadySet,

    /// A status read was attempted before any extract was attached
    #[error("no extract attached")]
    NoExtract,

    /// Caller broke an input contract (empty extract, empty label list, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors that can occur while loading a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario directory does not exist
    #[error("scenario directory not found: {}", path.display())]
    NotFound {
        /// Expected directory
        path: PathBuf,
    },

    /// One of the scenario documents is missing
    #[error("scenario file missing: {}", path.display())]
    MissingFile {
        /// Expected file
        path: PathBuf,
    },

    /// A scenario document could not be read
    #[error("failed to read {}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A scenario document is not valid JSON of the expected shape
    #[error("failed to parse {}", path.display())]
    Json {
        /// File being parsed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// The build list has no entries, so there is no root
    #[error("graph build list is empty")]
    EmptyBuild,

    /// A build entry after the root has no parent
    #[error("class '{child}' has no parent in the graph build list")]
    MissingParent {
        /// The orphaned class
        child: String,
    },
}
