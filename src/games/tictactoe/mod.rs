//! Tic-tac-toe core: board, rules, game state, and the scripted opponent.

mod action;
mod game;
mod invariants;
mod opponent;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use game::GameState;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MarkBalanceInvariant, TicTacToeInvariants,
};
pub use opponent::{OpponentPolicy, Tier};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{LINES, check_winner, evaluate_terminal, is_full};
pub use types::{Board, GameStatus, Player, Square};
