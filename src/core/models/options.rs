//! Propagation options
//!
//! Knobs for the two places where insertion behaviour is a policy decision
//! rather than a fixed rule.

use serde::{Deserialize, Serialize};

/// Which children of a parent get re-staged when a new child arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiblingScope {
    /// Only children that existed before the insertion; the new child stays valid
    #[default]
    Existing,
    /// Every child after the insertion, the new child included.
    ///
    /// This is the legacy propagation rule: a freshly inserted class is
    /// `coverage_staged` the moment it is created. Select it to replay
    /// fixtures whose expected statuses were recorded under that rule.
    All,
}

impl std::fmt::Display for SiblingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Existing => write!(f, "existing"),
            Self::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for SiblingScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "existing" => Ok(Self::Existing),
            "all" => Ok(Self::All),
            _ => Err(format!("Invalid sibling scope: {s}. Use: existing, all")),
        }
    }
}

/// How `add_nodes` behaves when one pair of a batch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Validate the whole batch first; on error nothing is applied
    #[default]
    Atomic,
    /// Apply pairs one by one; pairs before the failing one stay applied
    Sequential,
}

impl std::fmt::Display for BatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atomic => write!(f, "atomic"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for BatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "atomic" => Ok(Self::Atomic),
            "sequential" => Ok(Self::Sequential),
            _ => Err(format!("Invalid batch mode: {s}. Use: atomic, sequential")),
        }
    }
}

/// Options a taxonomy is created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxonomyOptions {
    /// Sibling re-staging scope
    #[serde(default)]
    pub sibling_scope: SiblingScope,
    /// Failure behaviour of `add_nodes`
    #[serde(default)]
    pub batch_mode: BatchMode,
}
