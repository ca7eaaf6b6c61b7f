//! Marquee CLI - Command-line interface
//!
//! Provides command-line access to the movie catalog search.

mod commands;
mod present;

use std::path::PathBuf;

use clap::Parser;
use marquee_core::tracing_setup::{CliLogLevel, init_tracing};
use marquee_core::{MarqueeConfig, VotesMode};

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search a movie catalog with a compact query language")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Catalog file (overrides MARQUEE_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Console log level
    #[arg(long, value_enum, default_value_t = CliLogLevel::Warn, global = true)]
    log_level: CliLogLevel,

    /// Also write a full trace of this run into this directory
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    /// Vote count interpretation; `legacy` keeps the historical suffix rule
    /// (overrides MARQUEE_LEGACY_VOTES)
    #[arg(long, value_enum, global = true)]
    votes_mode: Option<VotesMode>,
}

impl Cli {
    /// Applies command-line overrides on top of the environment configuration.
    fn apply_overrides(&self, mut config: MarqueeConfig) -> MarqueeConfig {
        if let Some(catalog) = &self.catalog {
            config.catalog.path = catalog.clone();
        }
        if let Some(mode) = self.votes_mode {
            config.search.votes_mode = mode;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref()) {
        eprintln!("Warning: logging setup failed: {e}");
    }

    let config = cli.apply_overrides(MarqueeConfig::from_env());
    tracing::debug!("Resolved configuration: {:?}", config);

    commands::handle_command(cli.command, config)
}
