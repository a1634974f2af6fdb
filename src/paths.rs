//! Centralized path definitions for taxostage
//!
//! Single source of truth for every filesystem path the tool touches.
//!
//! ## Scenario Layout
//!
//! ```text
//! data/scenarios/                 # Scenarios directory (configurable)
//! ├── 1/
//! │   ├── expected_status.json   # item -> expected status
//! │   ├── graph_build.json       # [[child, parent], ...], first child is the root
//! │   ├── graph_edits.json       # [[child, parent], ...]
//! │   └── img_extract.json       # item -> [class, ...]
//! ├── 2/
//! └── ...
//! ```
//!
//! ## Configuration
//!
//! ```text
//! ./taxostage.toml                       # Project config (checked first)
//! ~/.config/taxostage/config.toml        # User config (fallback)
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Scenario paths
// =============================================================================

/// Expected statuses document
pub const EXPECTED_STATUS_FILE: &str = "expected_status.json";

/// Initial build list document
pub const GRAPH_BUILD_FILE: &str = "graph_build.json";

/// Edit list document
pub const GRAPH_EDITS_FILE: &str = "graph_edits.json";

/// Extract document
pub const EXTRACT_FILE: &str = "img_extract.json";

/// Every document a scenario directory must hold
pub const SCENARIO_FILES: [&str; 4] = [
    EXPECTED_STATUS_FILE,
    GRAPH_BUILD_FILE,
    GRAPH_EDITS_FILE,
    EXTRACT_FILE,
];

/// Scenarios directory used when nothing is configured
pub const DEFAULT_SCENARIOS_DIR: &str = "data/scenarios";

/// Get the directory of scenario `id` under `base`.
#[must_use]
pub fn scenario_dir(base: &Path, id: u32) -> PathBuf {
    base.join(id.to_string())
}

// =============================================================================
// Config paths
// =============================================================================

/// Project configuration filename
pub const CONFIG_FILE: &str = "taxostage.toml";

/// User config directory name
const GLOBAL_DIR: &str = "taxostage";

/// User config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config in the current directory.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Get the user config directory.
///
/// Returns `<config dir>/taxostage/`, or `None` when the platform has no
/// config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GLOBAL_DIR))
}

/// Get the user config file path.
#[must_use]
pub fn global_config() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}
