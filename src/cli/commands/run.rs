//! Replay a single scenario

use taxostage::adapters::json::JsonScenarioLoader;
use taxostage::config::Config;
use taxostage::core::ports::ScenarioSource;
use taxostage::core::services::run_scenario;
use taxostage::output::{OutputMode, ScenarioResult};

/// Replay scenario `id` and print its item statuses
pub fn run(id: u32, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let loader = JsonScenarioLoader::new(&config.scenarios.dir);
    let scenario = loader.load(id)?;

    let outcome = run_scenario(&scenario, config.propagation)?;
    log::info!(
        "scenario {id}: {}/{} item(s) as expected",
        outcome.evaluation.correct,
        outcome.evaluation.total
    );

    ScenarioResult::from(outcome).render(mode);
    Ok(())
}
