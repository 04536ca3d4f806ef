//! Mutable game state for a single tic-tac-toe game.

use super::action::{InvalidMove, Move};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules;
use super::{Board, GameStatus, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Board, turn, and status of one game.
///
/// [`GameState::apply_move`] places a mark and records a win or draw as soon
/// as the board shows one. Handing the turn over is a separate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves applied so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// True iff `(row, col)` is on the board and the square is empty.
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        Position::from_row_col(row, col).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Places `player`'s mark at `(row, col)` and updates the status when the
    /// mark completes a line or fills the board.
    ///
    /// Does not flip the turn.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when the game is over, the coordinates are off
    /// the board, or the square is taken.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<(), InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        let pos = Position::from_row_col(row, col).ok_or(InvalidMove::OutOfRange { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(InvalidMove::Occupied(pos));
        }

        let mv = Move::new(player, pos);
        self.board.set(pos, Square::Occupied(player));
        self.history.push(mv);
        debug!(%mv, "Mark placed");

        if let Some(outcome) = self.evaluate_terminal() {
            debug!(%outcome, "Game finished");
            self.status = outcome.into();
        }
        Ok(())
    }

    /// Evaluates the board without changing anything.
    pub fn evaluate_terminal(&self) -> Option<Outcome> {
        rules::evaluate_terminal(&self.board)
    }

    /// Settles the turn after a successful [`GameState::apply_move`]: hands
    /// the turn to the other player unless the game just ended.
    #[instrument(skip(self))]
    pub(crate) fn end_turn(&mut self) -> GameStatus {
        if !self.status.is_terminal() {
            self.current_player = self.current_player.opponent();
        }
        self.verify_invariants();
        self.status
    }

    /// Clears the board, gives X the move, and resumes play.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    fn verify_invariants(&self) {
        if let Err(violations) = TicTacToeInvariants::check_all(self) {
            for violation in &violations {
                warn!(invariant = %violation.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "game invariants violated");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
