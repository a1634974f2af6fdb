//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without real I/O operations.

use std::collections::BTreeMap;

use taxostage::core::ScenarioError;
use taxostage::core::models::Scenario;
use taxostage::core::ports::ScenarioSource;

/// In-memory implementation of `ScenarioSource`
pub struct InMemoryScenarios {
    scenarios: BTreeMap<u32, Scenario>,
}

impl InMemoryScenarios {
    pub fn new() -> Self {
        Self {
            scenarios: BTreeMap::new(),
        }
    }

    pub fn with_scenarios(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios: scenarios.into_iter().map(|s| (s.id(), s)).collect(),
        }
    }
}

impl Default for InMemoryScenarios {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioSource for InMemoryScenarios {
    fn load(&self, id: u32) -> Result<Scenario, ScenarioError> {
        self.scenarios
            .get(&id)
            .cloned()
            .ok_or_else(|| ScenarioError::NotFound {
                path: format!("memory://{id}").into(),
            })
    }

    fn list(&self) -> Result<Vec<u32>, ScenarioError> {
        Ok(self.scenarios.keys().copied().collect())
    }
}
