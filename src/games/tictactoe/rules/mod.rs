//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates, so the same
//! checks serve both the live game and hypothetical lookahead.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates whether the board is terminal.
///
/// Lines are checked rows first, then columns, then the two diagonals;
/// the first complete line decides the winner. A full board without a
/// complete line is a draw. Anything else is `None`.
#[instrument(skip(board), level = "trace")]
pub fn evaluate_terminal(board: &Board) -> Option<Outcome> {
    if let Some(winner) = check_winner(board) {
        return Some(Outcome::Winner(winner));
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}
