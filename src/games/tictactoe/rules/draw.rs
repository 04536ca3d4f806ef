//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Checks if the board is full (all squares occupied). A full board with no
/// completed line is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
