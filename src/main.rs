//! Tic-tac-toe - terminal front end
//!
//! Loads configuration, builds the session, and hands control to the TUI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tic_tac_toe::{GameConfig, GameMode, OpponentPolicy, SessionController};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let config = cli.apply(config);
    config.validate().context("Invalid configuration")?;

    let policy = match config.seed() {
        Some(seed) => OpponentPolicy::seeded(*seed),
        None => OpponentPolicy::from_entropy(),
    };
    let mode = config.mode().unwrap_or(GameMode::HumanVsHuman);
    let session = SessionController::new(mode, policy);

    tui::run(&config, session)
}
