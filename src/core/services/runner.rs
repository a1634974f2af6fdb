//! Scenario replay
//!
//! Drives a taxonomy through the lifecycle of one scenario: root, build
//! tail, extract, edits, then reads and scores the statuses.

use log::debug;
use serde::Serialize;

use crate::core::error::TaxonomyError;
use crate::core::models::{Scenario, StatusReport, TaxonomyOptions};

use super::evaluator::{Evaluation, evaluate};
use super::taxonomy::Taxonomy;

/// Result of replaying a scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario id
    pub scenario_id: u32,
    /// Computed item statuses
    pub statuses: StatusReport,
    /// Expected item statuses the run was scored against
    pub expected: StatusReport,
    /// Comparison against the expected statuses
    pub evaluation: Evaluation,
}

/// Replay `scenario` on a fresh taxonomy and score the result
pub fn run_scenario(
    scenario: &Scenario,
    options: TaxonomyOptions,
) -> Result<ScenarioOutcome, TaxonomyError> {
    debug!(
        "replaying scenario {} ({} build, {} edit entries)",
        scenario.id(),
        scenario.graph_tail().len(),
        scenario.graph_edits().len()
    );

    let mut taxonomy = Taxonomy::with_options(scenario.graph_root(), options);
    taxonomy.add_nodes(scenario.graph_tail())?;
    taxonomy.add_extract(scenario.extract().clone())?;
    taxonomy.add_nodes(scenario.graph_edits())?;

    let statuses = taxonomy.get_extract_status()?;
    let evaluation = evaluate(scenario.expected_status(), &statuses)?;

    Ok(ScenarioOutcome {
        scenario_id: scenario.id(),
        statuses,
        expected: scenario.expected_status().clone(),
        evaluation,
    })
}
