//! dockhost configuration.
//!
//! TOML-based settings for panel decoration, layout persistence and
//! logging. Every section has defaults, so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dockhost_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("headers shown: {}", config.display.show_header);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{DockConfig, LogLevel, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{load_default, load_from_path};
pub use toml_writer::save_config_to_path;

use dockhost_common::ConfigError;

/// Load config from the platform default path and validate it.
pub fn load_config() -> Result<DockConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
