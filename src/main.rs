//! Tictactoe - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{AppConfig, Cli, Command, Replay, logging, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command() {
        Command::Play { names } => {
            let config = config.with_names(&names);
            logging::init_file(&config)?;
            info!("Starting tictactoe");
            tui::run(&config)
        }
        Command::Replay { moves, json, names } => {
            let config = config.with_names(&names);
            logging::init_stderr(&config);
            run_replay(&config, &moves, json)
        }
    }
}

/// Replays `moves` and prints either the text report or the final state as JSON.
fn run_replay(config: &AppConfig, moves: &[tictactoe_core::Position], json: bool) -> Result<()> {
    let replay = Replay::run(config, moves);
    if json {
        let out = serde_json::to_string_pretty(replay.game()).context("Failed to serialize game")?;
        println!("{}", out);
    } else {
        println!("{}", replay.report());
    }
    Ok(())
}
