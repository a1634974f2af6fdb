//! Replay every scenario and score the results

use anyhow::Context;

use taxostage::adapters::json::JsonScenarioLoader;
use taxostage::config::Config;
use taxostage::core::ports::ScenarioSource;
use taxostage::core::services::run_scenario;
use taxostage::output::{EvalSummary, OutputMode, ScenarioScore};

/// Replay all scenarios, print per-scenario accuracy and the mean
pub fn eval(min_accuracy: Option<f64>, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    if let Some(min) = min_accuracy
        && !(0.0..=1.0).contains(&min)
    {
        anyhow::bail!("--min-accuracy must be between 0.0 and 1.0, got {min}");
    }

    let loader = JsonScenarioLoader::new(&config.scenarios.dir);

    let mut scores = Vec::new();
    for scenario in loader.load_all()? {
        let outcome = run_scenario(&scenario, config.propagation)
            .with_context(|| format!("scenario {} failed", scenario.id()))?;
        scores.push(ScenarioScore::from(&outcome));
    }

    let summary = EvalSummary::new(scores, min_accuracy);
    summary.render(mode);

    if !summary.passed {
        anyhow::bail!(
            "mean accuracy {:.3} is below the required {:.3}",
            summary.mean_accuracy,
            min_accuracy.unwrap_or_default()
        );
    }

    Ok(())
}
