use clap::{Parser, Subcommand};

/// dockhost: inspect and manage saved docking layouts.
#[derive(Parser, Debug)]
#[command(name = "dockhost", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List the saved layout's panels in layout order.
    Show,
    /// Print the saved layout as JSON.
    Export {
        /// Print a loadable layout with the configured display settings applied.
        #[arg(long)]
        loadable: bool,
    },
    /// Delete the saved layout.
    Reset,
    /// Print where the saved layout lives.
    Path,
}

pub fn parse() -> Args {
    Args::parse()
}
