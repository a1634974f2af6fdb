//! Integration tests for the taxostage CLI
//!
//! These tests run the binary against scenario fixtures written to a
//! temporary directory.


#[path = "../common/mod.rs"]
#[allow(dead_code)]
mod common;

use assert_cmd::cargo;
use predicates::prelude::*;

use common::fixtures::ScenarioDir;

/// Helper function to create a taxostage command
fn taxostage() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("taxostage"))
}

// =============================================================================
// RUN
// =============================================================================

#[test]
fn test_run_reports_statuses() {
    let dir = ScenarioDir::new();
    dir.add_food_scenario(1);

    taxostage()
        .args(["run", "1", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("img1"))
        .stdout(predicate::str::contains("granularity_staged"))
        .stdout(predicate::str::contains("invalid"))
        .stdout(predicate::str::contains("Accuracy: 100.0% (2/2)"));
}

#[test]
fn test_run_json_output() {
    let dir = ScenarioDir::new();
    dir.add_food_scenario(1);

    let output = taxostage()
        .args(["--json", "run", "1", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["scenario_id"], 1);
    assert_eq!(json["items"][0]["status"], "granularity_staged");
    assert_eq!(json["items"][1]["status"], "invalid");
}

#[test]
fn test_run_sibling_scope_override() {
    let dir = ScenarioDir::new();
    dir.add_orchard_scenario(2);

    taxostage()
        .args(["run", "2", "--sibling-scope", "all", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mismatches:"))
        .stdout(predicate::str::contains("Accuracy: 75.0% (3/4)"));
}

#[test]
fn test_run_missing_scenario_fails() {
    let dir = ScenarioDir::new();

    taxostage()
        .args(["run", "9", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario directory not found"));
}

#[test]
fn test_run_rejects_unknown_scope() {
    taxostage()
        .args(["run", "1", "--sibling-scope", "some"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sibling scope"));
}

#[test]
fn test_run_unknown_parent_in_edits_fails() {
    let dir = ScenarioDir::new();
    dir.add_scenario(
        1,
        &[("food", None)],
        &[("apple", "fruit")],
        &[("img1", &["food"])],
        &[("img1", "valid")],
    );

    taxostage()
        .args(["run", "1", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown parent 'fruit'"));
}

// =============================================================================
// EVAL / LIST
// =============================================================================

#[test]
fn test_eval_all_scenarios() {
    let dir = ScenarioDir::new();
    dir.add_food_scenario(1);
    dir.add_orchard_scenario(2);

    taxostage()
        .args(["eval", "--min-accuracy", "1.0", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean accuracy: 100.0%"))
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn test_eval_below_threshold_fails() {
    let dir = ScenarioDir::new();
    dir.add_orchard_scenario(1);

    taxostage()
        .args(["eval", "--sibling-scope", "all", "--min-accuracy", "0.9", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED"))
        .stderr(predicate::str::contains("below the required"));
}

#[test]
fn test_eval_rejects_out_of_range_threshold() {
    let dir = ScenarioDir::new();

    taxostage()
        .args(["eval", "--min-accuracy", "1.5", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 0.0 and 1.0"));
}

#[test]
fn test_list_scenarios_json() {
    let dir = ScenarioDir::new();
    dir.add_food_scenario(5);
    dir.add_food_scenario(3);

    let output = taxostage()
        .args(["--json", "list", "--scenarios-dir"])
        .arg(dir.path())
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["scenarios"], serde_json::json!([3, 5]));
}

// =============================================================================
// MISC
// =============================================================================

#[test]
fn test_version() {
    taxostage()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "taxostage v{}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_no_command_prints_hint() {
    taxostage()
        .assert()
        .success()
        .stdout(predicate::str::contains("taxostage --help"));
}
