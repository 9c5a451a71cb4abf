//! Full configuration validation.
//!
//! Each section has its own check; errors are collected into a single
//! `ConfigError`.

mod display;
mod helpers;
mod persistence;


use crate::schema::DockConfig;
use dockhost_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    display::validate_display(&mut errors, config);
    persistence::validate_persistence(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
