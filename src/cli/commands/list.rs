//! List available scenarios

use taxostage::adapters::json::JsonScenarioLoader;
use taxostage::config::Config;
use taxostage::core::ports::ScenarioSource;
use taxostage::output::{OutputMode, ScenarioList};

/// List scenario ids under the configured directory
pub fn list(config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let loader = JsonScenarioLoader::new(&config.scenarios.dir);

    let result = ScenarioList {
        base_dir: loader.base_dir().to_path_buf(),
        scenarios: loader.list()?,
    };
    result.render(mode);
    Ok(())
}
