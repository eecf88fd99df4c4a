//! Configuration file resolution and loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::CheckerConfig;
use crate::error::StandardsError;

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "SHARE_STANDARDS_DIR";

/// File name of the content template configuration inside the standards directory.
pub const CONFIG_FILE_NAME: &str = "content_template.toml";

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `SHARE_STANDARDS_DIR` environment variable
/// 2. `standards/` directory relative to workspace root
pub fn standards_root() -> PathBuf {
    if let Ok(root) = std::env::var(STANDARDS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Read, parse and validate a configuration file.
pub fn load_config(path: &Path) -> Result<CheckerConfig, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let config = CheckerConfig::from_toml_str(&text, path)?;
    debug!(
        path = %path.display(),
        required = config.rules.required.len(),
        coding_pairs = config.rules.coding.len(),
        "loaded checker configuration"
    );
    Ok(config)
}

/// Load the configuration from the standards directory.
///
/// Falls back to the built-in tables when no configuration file exists.
pub fn load_default_config() -> Result<CheckerConfig, StandardsError> {
    let path = standards_root().join(CONFIG_FILE_NAME);
    if path.is_file() {
        return load_config(&path);
    }
    debug!(path = %path.display(), "no configuration file, using built-in tables");
    let config = CheckerConfig::builtin();
    config.validate()?;
    Ok(config)
}
