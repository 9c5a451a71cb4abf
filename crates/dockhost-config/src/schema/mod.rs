//! Configuration schema types for dockhost.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod display;
mod logging;
mod persistence;

pub use display::*;
pub use logging::*;
pub use persistence::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub display: DisplayConfig,
    pub persistence: PersistenceConfig,
    pub logging: LoggingConfig,
}
