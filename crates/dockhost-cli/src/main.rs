mod cli;
mod commands;

use std::path::Path;

use dockhost_config::{validation, DockConfig};
use tracing_subscriber::EnvFilter;

fn load_config(path: Option<&str>) -> Result<DockConfig, dockhost_common::ConfigError> {
    match path {
        Some(path) => {
            let config = dockhost_config::load_from_path(Path::new(path))?;
            validation::validate(&config)?;
            Ok(config)
        }
        None => dockhost_config::load_config(),
    }
}

fn main() {
    let args = cli::parse();

    let loaded = load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|config| config.logging.level.as_directive())
        .unwrap_or("info");

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(config_level);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            log_directive.parse().unwrap_or_else(|_| {
                tracing_subscriber::filter::LevelFilter::INFO.into()
            }),
        ))
        .init();

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        DockConfig::default()
    });

    let result = commands::open_store(&config).and_then(|store| {
        tracing::debug!(path = %store.path().display(), "layout store");
        commands::run(args.command, &store, config.display.policy())
    });
    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("dockhost: {e}");
        std::process::exit(1);
    }
}
