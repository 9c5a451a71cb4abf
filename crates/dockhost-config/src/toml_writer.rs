//! Write DockConfig to TOML on disk.

use std::path::Path;

use dockhost_common::{write_atomic, ConfigError};

use crate::schema::DockConfig;

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &DockConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    write_atomic(path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            path.display()
        ))
    })?;

    tracing::debug!(path = %path.display(), "config saved to disk");
    Ok(())
}
