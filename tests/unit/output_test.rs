//! Tests for output structures and their JSON shape

use taxostage::adapters::json::JsonScenarioLoader;
use taxostage::core::models::{SiblingScope, Status, TaxonomyOptions};
use taxostage::core::ports::ScenarioSource;
use taxostage::core::services::{ScenarioOutcome, run_scenario};
use taxostage::output::{EvalSummary, ScenarioResult, ScenarioScore};

use crate::common::fixtures::ScenarioDir;

fn orchard_outcome(options: TaxonomyOptions) -> ScenarioOutcome {
    let dir = ScenarioDir::new();
    dir.add_orchard_scenario(4);
    let scenario = JsonScenarioLoader::new(dir.path()).load(4).unwrap();
    run_scenario(&scenario, options).unwrap()
}

#[test]
fn test_scenario_result_marks_mismatches() {
    let options = TaxonomyOptions {
        sibling_scope: SiblingScope::All,
        ..TaxonomyOptions::default()
    };
    let result = ScenarioResult::from(orchard_outcome(options));

    assert_eq!(result.scenario_id, 4);
    assert_eq!(result.total, 4);
    assert_eq!(result.correct, 3);

    let d = result.items.iter().find(|i| i.item == "d").unwrap();
    assert_eq!(d.status, Status::CoverageStaged);
    assert!(!d.correct);
    assert!(result.items.iter().filter(|i| i.item != "d").all(|i| i.correct));
}

#[test]
fn test_scenario_result_json_shape() {
    let result = ScenarioResult::from(orchard_outcome(TaxonomyOptions::default()));
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["scenario_id"], 4);
    assert_eq!(json["accuracy"], 1.0);
    assert_eq!(json["items"][0]["item"], "a");
    assert_eq!(json["items"][0]["status"], "coverage_staged");
    assert!(json["mismatches"].as_array().unwrap().is_empty());
}

#[test]
fn test_eval_summary_json_skips_missing_threshold() {
    let outcome = orchard_outcome(TaxonomyOptions::default());
    let summary = EvalSummary::new(vec![ScenarioScore::from(&outcome)], None);
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["mean_accuracy"], 1.0);
    assert_eq!(json["passed"], true);
    assert!(json.get("min_accuracy").is_none());
}

#[test]
fn test_item_without_expectation_is_not_correct() {
    let dir = ScenarioDir::new();
    dir.add_scenario(
        7,
        &[("food", None)],
        &[],
        &[("a", &["food"]), ("z", &["nope"])],
        &[("a", "valid")],
    );
    let scenario = JsonScenarioLoader::new(dir.path()).load(7).unwrap();
    let outcome = run_scenario(&scenario, TaxonomyOptions::default()).unwrap();
    let result = ScenarioResult::from(outcome);

    assert_eq!(result.total, 1);
    assert_eq!(result.correct, 1);

    let a = result.items.iter().find(|i| i.item == "a").unwrap();
    assert_eq!(a.expected, Some(Status::Valid));
    assert!(a.correct);

    let z = result.items.iter().find(|i| i.item == "z").unwrap();
    assert_eq!(z.status, Status::Invalid);
    assert_eq!(z.expected, None);
    assert!(!z.correct);

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["items"][1]["expected"].is_null());
    assert_eq!(json["items"][1]["correct"], false);
}
