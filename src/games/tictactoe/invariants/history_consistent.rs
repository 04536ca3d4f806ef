//! History consistency invariant: history and board agree.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every recorded move is on the board, and nothing else is.
///
/// History length equals the number of occupied squares and each history
/// entry's square holds that entry's player.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let occupied = board
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied == game.history().len()
            && game
                .history()
                .iter()
                .all(|m| board.get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}
