//! Scenario source port
//!
//! Defines the interface for discovering and loading scenarios.

use super::super::error::ScenarioError;
use super::super::models::Scenario;

/// Source of replayable scenarios
///
/// Implementations decide where scenarios live (a fixture directory, an
/// in-memory set for tests, ...).
pub trait ScenarioSource {
    /// Load a single scenario by id
    fn load(&self, id: u32) -> Result<Scenario, ScenarioError>;

    /// List available scenario ids in ascending order
    fn list(&self) -> Result<Vec<u32>, ScenarioError>;

    /// Load every available scenario
    fn load_all(&self) -> Result<Vec<Scenario>, ScenarioError> {
        self.list()?.into_iter().map(|id| self.load(id)).collect()
    }
}
