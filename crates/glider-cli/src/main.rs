use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use glider_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "glider")]
#[command(version, about = "A smooth-scrolling terminal slide carousel")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Deck file to present (shorthand for `run`)
    deck: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the carousel
    Run {
        /// Deck file (TOML); the built-in sample deck when omitted
        deck: Option<PathBuf>,
    },
    /// Validate a deck file and print its computed strip layout
    Check {
        /// Deck file (TOML)
        deck: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Run { deck }) => commands::run::run(config, deck),
        Some(Commands::Check { deck }) => commands::check::run(&config, &deck),
        None => commands::run::run(config, cli.deck),
    }
}
