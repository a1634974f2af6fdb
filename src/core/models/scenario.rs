//! Scenarios
//!
//! A scenario bundles everything needed to replay one taxonomy evolution:
//! the initial build list, the extract, the later edits and the statuses the
//! items are expected to end up with.

use crate::core::error::ScenarioError;

use super::extract::{Extract, StatusReport};

/// A `(child, parent)` pair
pub type Edge = (String, String);

/// A validated scenario
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario id (directory name)
    id: u32,
    /// Root class name
    root: String,
    /// Build entries after the root
    tail: Vec<Edge>,
    /// Edits applied once the extract is attached
    edits: Vec<Edge>,
    /// Item labels
    extract: Extract,
    /// Expected item statuses
    expected: StatusReport,
}

impl Scenario {
    /// Build a scenario from a raw build list.
    ///
    /// The first element of the first build entry names the root; its parent
    /// slot is ignored. Every later entry must carry a parent.
    pub fn new(
        id: u32,
        build: Vec<(String, Option<String>)>,
        edits: Vec<Edge>,
        extract: Extract,
        expected: StatusReport,
    ) -> Result<Self, ScenarioError> {
        let mut entries = build.into_iter();
        let (root, _) = entries.next().ok_or(ScenarioError::EmptyBuild)?;

        let tail = entries
            .map(|(child, parent)| match parent {
                Some(parent) => Ok((child, parent)),
                None => Err(ScenarioError::MissingParent { child }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            root,
            tail,
            edits,
            extract,
            expected,
        })
    }

    /// Scenario id
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Root class name
    #[must_use]
    pub fn graph_root(&self) -> &str {
        &self.root
    }

    /// Build entries inserted before the extract is attached
    #[must_use]
    pub fn graph_tail(&self) -> &[Edge] {
        &self.tail
    }

    /// Edits inserted after the extract is attached
    #[must_use]
    pub fn graph_edits(&self) -> &[Edge] {
        &self.edits
    }

    /// Item labels
    #[must_use]
    pub const fn extract(&self) -> &Extract {
        &self.extract
    }

    /// Expected item statuses
    #[must_use]
    pub const fn expected_status(&self) -> &StatusReport {
        &self.expected
    }
}
