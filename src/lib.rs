//! Tic-tac-toe library - game core for local play
//!
//! The core is three pieces with no rendering or I/O in them, so any front
//! end (the bundled terminal UI, a test, a different window system) can
//! drive it from its own loop.
//!
//! # Architecture
//!
//! - **GameState**: board, player to move, and win/draw detection
//! - **OpponentPolicy**: scripted opponent (win, then block, then random)
//! - **SessionController**: mode, turn sequencing, opponent thinking delay
//! - **GameConfig**: front-end settings loaded from TOML
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tic_tac_toe::{GameMode, OpponentPolicy, Player, SessionController, Square};
//!
//! let mut session = SessionController::new(GameMode::HumanVsOpponent, OpponentPolicy::seeded(1));
//! assert!(session.submit_move(1, 1));
//!
//! // The opponent has decided but waits out its delay.
//! assert!(session.pending_move().is_some());
//! session.advance(Duration::from_millis(700));
//!
//! assert_eq!(session.current_player(), Player::X);
//! assert_eq!(session.state().board().count(Player::O), 1);
//! assert_eq!(session.state().board().at(1, 1), Some(Square::Occupied(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Session control
pub use session::{
    GameMode, OPPONENT_DELAY, OPPONENT_MARK, PendingOpponentMove, SessionController,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, Board, GameState, GameStatus, HistoryConsistentInvariant,
    InvalidMove, Invariant, InvariantSet, InvariantViolation, LINES, MarkBalanceInvariant, Move,
    OpponentPolicy, Outcome, Player, Position, Square, TicTacToeInvariants, Tier, check_winner,
    evaluate_terminal, is_full,
};
