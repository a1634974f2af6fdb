//! Write a default configuration file

use taxostage::config::Config;
use taxostage::output::{OperationResult, OutputMode};
use taxostage::paths;

/// Create `taxostage.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::local_config();

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists). Use --force to overwrite.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    Config::default().save(&path)?;

    OperationResult {
        success: true,
        message: format!("Created {}", path.display()),
    }
    .render(mode);
    Ok(())
}
