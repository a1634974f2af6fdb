//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::core::models::Status;
use crate::core::services::{Mismatch, ScenarioOutcome};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Colour a status for terminal output
fn paint(status: Status) -> ColoredString {
    match status {
        Status::Invalid => status.as_str().red().bold(),
        Status::CoverageStaged => status.as_str().yellow(),
        Status::GranularityStaged => status.as_str().cyan(),
        Status::Valid => status.as_str().green(),
    }
}

fn percent(accuracy: f64) -> String {
    format!("{:.1}%", accuracy * 100.0)
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

/// Status of one item in a scenario report
#[derive(Debug, Serialize)]
pub struct ItemStatus {
    /// Item name
    pub item: String,
    /// Computed status
    pub status: Status,
    /// Expected status, `None` if the item has no expectation
    pub expected: Option<Status>,
    /// Whether the computed status matches the expected one
    pub correct: bool,
}

/// Result of a `run` command
#[derive(Debug, Serialize)]
pub struct ScenarioResult {
    /// Scenario id
    pub scenario_id: u32,
    /// Share of expected items computed correctly
    pub accuracy: f64,
    /// Number of correct items
    pub correct: usize,
    /// Number of expected items
    pub total: usize,
    /// Computed status per item, sorted by item name
    pub items: Vec<ItemStatus>,
    /// Wrong or missing items
    pub mismatches: Vec<Mismatch>,
}

impl From<ScenarioOutcome> for ScenarioResult {
    fn from(outcome: ScenarioOutcome) -> Self {
        let evaluation = outcome.evaluation;
        let expected_statuses = outcome.expected;
        let items = outcome
            .statuses
            .into_iter()
            .map(|(item, status)| {
                let expected = expected_statuses.get(&item).copied();
                ItemStatus {
                    item,
                    status,
                    expected,
                    correct: expected == Some(status),
                }
            })
            .collect();

        Self {
            scenario_id: outcome.scenario_id,
            accuracy: evaluation.accuracy,
            correct: evaluation.correct,
            total: evaluation.total,
            items,
            mismatches: evaluation.mismatches,
        }
    }
}

impl ScenarioResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Scenario {}\n", self.scenario_id);

        let width = self.items.iter().map(|i| i.item.len()).max().unwrap_or(0);
        for item in &self.items {
            let marker = match item.expected {
                None => "?",
                Some(_) if item.correct => " ",
                Some(_) => "!",
            };
            println!("  {marker} {:<width$}  {}", item.item, paint(item.status));
        }

        if !self.mismatches.is_empty() {
            println!("\nMismatches:");
            for m in &self.mismatches {
                let computed = m.computed.map_or_else(|| "missing".dimmed(), paint);
                println!("  {}: expected {}, got {}", m.item, paint(m.expected), computed);
            }
        }

        println!(
            "\nAccuracy: {} ({}/{})",
            percent(self.accuracy),
            self.correct,
            self.total
        );
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Score of one scenario in an `eval` run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScenarioScore {
    /// Scenario id
    pub scenario_id: u32,
    /// Share of expected items computed correctly
    pub accuracy: f64,
    /// Number of correct items
    pub correct: usize,
    /// Number of expected items
    pub total: usize,
}

impl From<&ScenarioOutcome> for ScenarioScore {
    fn from(outcome: &ScenarioOutcome) -> Self {
        Self {
            scenario_id: outcome.scenario_id,
            accuracy: outcome.evaluation.accuracy,
            correct: outcome.evaluation.correct,
            total: outcome.evaluation.total,
        }
    }
}

/// Result of an `eval` command
#[derive(Debug, Serialize)]
pub struct EvalSummary {
    /// Per-scenario scores, by ascending id
    pub scenarios: Vec<ScenarioScore>,
    /// Mean accuracy over all scenarios
    pub mean_accuracy: f64,
    /// Required mean accuracy, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_accuracy: Option<f64>,
    /// Whether the mean reaches the required accuracy
    pub passed: bool,
}

impl EvalSummary {
    /// Summarize scores against an optional threshold
    #[must_use]
    pub fn new(scenarios: Vec<ScenarioScore>, min_accuracy: Option<f64>) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let mean_accuracy = if scenarios.is_empty() {
            0.0
        } else {
            scenarios.iter().map(|s| s.accuracy).sum::<f64>() / scenarios.len() as f64
        };
        let passed = min_accuracy.is_none_or(|min| mean_accuracy >= min);

        Self {
            scenarios,
            mean_accuracy,
            min_accuracy,
            passed,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.scenarios.is_empty() {
            println!("No scenarios found.");
            return;
        }

        for s in &self.scenarios {
            println!(
                "  [{}] {:>6}  ({}/{})",
                s.scenario_id,
                percent(s.accuracy),
                s.correct,
                s.total
            );
        }

        println!("\nMean accuracy: {}", percent(self.mean_accuracy));
        if let Some(min) = self.min_accuracy {
            if self.passed {
                println!("{} (threshold {})", "PASSED".green().bold(), percent(min));
            } else {
                println!("{} (threshold {})", "FAILED".red().bold(), percent(min));
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a `list` command
#[derive(Debug, Serialize)]
pub struct ScenarioList {
    /// Directory that was scanned
    pub base_dir: PathBuf,
    /// Scenario ids found
    pub scenarios: Vec<u32>,
}

impl ScenarioList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.scenarios.is_empty() {
            println!("No scenarios in {}.", self.base_dir.display());
            return;
        }

        println!("Scenarios in {}:\n", self.base_dir.display());
        for id in &self.scenarios {
            println!("  {id}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
