//! The `dockhost` subcommands, run against the configured layout store.

use dockhost_common::{PersistError, Result};
use dockhost_config::DockConfig;
use dockhost_layout::{DisplayPolicy, LayoutConfig, ResolvedLayoutConfig};
use dockhost_virtual::{JsonFilePersistence, LayoutPersistence};
use tracing::info;

use crate::cli::Command;

pub fn open_store(config: &DockConfig) -> Result<JsonFilePersistence> {
    let directory = config
        .persistence
        .resolved_directory()
        .ok_or(PersistError::NoStorageDir)?;
    Ok(JsonFilePersistence::new(
        directory,
        &config.persistence.storage_key,
    ))
}

pub fn run(command: Command, store: &JsonFilePersistence, policy: DisplayPolicy) -> Result<()> {
    match command {
        Command::Show => match store.load()? {
            Some(layout) => {
                for line in describe(&layout) {
                    println!("{line}");
                }
            }
            None => println!("no saved layout at {}", store.path().display()),
        },
        Command::Export { loadable } => match store.load()? {
            Some(layout) if loadable => println!("{}", export_loadable(&layout, policy)?),
            Some(layout) => println!("{}", export(&layout)?),
            None => println!("no saved layout at {}", store.path().display()),
        },
        Command::Reset => {
            store.remove()?;
            info!(path = %store.path().display(), "saved layout removed");
            println!("removed {}", store.path().display());
        }
        Command::Path => println!("{}", store.path().display()),
    }
    Ok(())
}

/// One tab-separated `refId  type  title` line per panel, depth-first.
pub fn describe(layout: &ResolvedLayoutConfig) -> Vec<String> {
    LayoutConfig::from_resolved(layout)
        .element_configs()
        .into_iter()
        .map(|config| {
            format!(
                "{}\t{}\t{}",
                config.ref_id,
                config.kind,
                config.title.unwrap_or_default()
            )
        })
        .collect()
}

pub fn export(layout: &ResolvedLayoutConfig) -> Result<String> {
    serde_json::to_string_pretty(layout)
        .map_err(|e| PersistError::Serialize(e.to_string()).into())
}

/// The saved layout as the coordinator would load it: unresolved, with the
/// display policy stamped on.
pub fn export_loadable(layout: &ResolvedLayoutConfig, policy: DisplayPolicy) -> Result<String> {
    let config = policy.apply(LayoutConfig::from_resolved(layout));
    serde_json::to_string_pretty(&config)
        .map_err(|e| PersistError::Serialize(e.to_string()).into())
}
