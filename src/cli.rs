//! Command-line interface for tic_tac_toe.

use clap::Parser;
use std::path::PathBuf;
use tic_tac_toe::{GameConfig, GameMode};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start directly in this mode instead of showing the menu
    #[arg(short, long, value_enum)]
    pub mode: Option<GameMode>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between UI ticks
    #[arg(long)]
    pub tick_rate_ms: Option<u64>,

    /// File to write logs to
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layers command-line values over `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(tick_rate_ms) = self.tick_rate_ms {
            config = config.with_tick_rate_ms(tick_rate_ms);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        config
    }
}
