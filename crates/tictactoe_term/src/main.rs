//! Tic-tac-toe terminal front end.
//!
//! Drives the `tictactoe_core` command interface from stdin.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    init_tracing(config.log_level());

    match cli.command {
        Command::Play { player_x, player_o } => run_play(config.with_names(player_x, player_o)),
        Command::Replay {
            moves,
            json,
            player_x,
            player_o,
        } => {
            let config = config.with_names(player_x, player_o);
            let stdout = std::io::stdout();
            play::replay(&config, &moves, json, &mut stdout.lock())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip_all)]
fn run_play(config: GameConfig) -> Result<()> {
    debug!(?config, "Starting interactive play");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play::run_interactive(&config, stdin.lock(), &mut stdout.lock())
}
