//! JSON scenario loader
//!
//! Implements the `ScenarioSource` port trait over a directory of numbered
//! scenario folders.

use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::core::error::ScenarioError;
use crate::core::models::Scenario;
use crate::core::ports::ScenarioSource;
use crate::paths;

use super::parser::{BuildDocument, EditsDocument, ExpectedDocument, ExtractDocument, load_document};

/// Scenario source backed by JSON fixture directories
#[derive(Debug, Clone)]
pub struct JsonScenarioLoader {
    /// Directory holding one sub-directory per scenario
    base_dir: PathBuf,
}

impl JsonScenarioLoader {
    /// Create a loader rooted at `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Directory the loader reads from
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Check that the scenario directory holds all four documents
    fn scenario_path(&self, id: u32) -> Result<PathBuf, ScenarioError> {
        let dir = paths::scenario_dir(&self.base_dir, id);
        if !dir.is_dir() {
            return Err(ScenarioError::NotFound { path: dir });
        }

        if let Some(missing) = paths::SCENARIO_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| !path.is_file())
        {
            return Err(ScenarioError::MissingFile { path: missing });
        }

        Ok(dir)
    }
}

impl ScenarioSource for JsonScenarioLoader {
    fn load(&self, id: u32) -> Result<Scenario, ScenarioError> {
        let dir = self.scenario_path(id)?;
        debug!("loading scenario {id} from {}", dir.display());

        let expected: ExpectedDocument = load_document(&dir.join(paths::EXPECTED_STATUS_FILE))?;
        let build: BuildDocument = load_document(&dir.join(paths::GRAPH_BUILD_FILE))?;
        let edits: EditsDocument = load_document(&dir.join(paths::GRAPH_EDITS_FILE))?;
        let extract: ExtractDocument = load_document(&dir.join(paths::EXTRACT_FILE))?;

        Scenario::new(id, build, edits, extract, expected)
    }

    fn list(&self) -> Result<Vec<u32>, ScenarioError> {
        if !self.base_dir.is_dir() {
            return Err(ScenarioError::NotFound {
                path: self.base_dir.clone(),
            });
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.base_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| ScenarioError::Io {
                path: self.base_dir.clone(),
                source: err.into(),
            })?;

            // Follows symlinks, like `load`
            if !entry.path().is_dir() {
                continue;
            }

            // Non-numeric directories are not scenarios
            if let Some(id) = entry.file_name().to_str().and_then(|s| s.parse().ok()) {
                ids.push(id);
            }
        }

        ids.sort_unstable();
        Ok(ids)
    }
}
