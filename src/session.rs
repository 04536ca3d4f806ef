//! Session control: mode, turn sequencing, and the opponent's thinking delay.
//!
//! A [`SessionController`] is driven from a single loop. Input events call
//! [`SessionController::submit_move`], [`SessionController::reset_session`]
//! or [`SessionController::start_session`]; every tick calls
//! [`SessionController::advance`] with the elapsed time. Nothing blocks: the
//! opponent's delay is accumulated tick by tick.

use crate::games::tictactoe::{Board, GameState, GameStatus, OpponentPolicy, Player, Position};
use derive_getters::Getters;
use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// How long the opponent "thinks" before its chosen move lands.
pub const OPPONENT_DELAY: Duration = Duration::from_millis(700);

/// The mark played by the scripted opponent. The human always plays X.
pub const OPPONENT_MARK: Player = Player::O;

/// Who sits across the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    clap::ValueEnum,
)]
pub enum GameMode {
    /// Two humans share the board.
    #[serde(rename = "pvp")]
    #[value(name = "pvp")]
    #[display("Player vs Player")]
    HumanVsHuman,
    /// A human (X) plays the scripted opponent (O).
    #[serde(rename = "pvc")]
    #[value(name = "pvc")]
    #[display("Player vs Computer")]
    HumanVsOpponent,
}

/// An opponent move that has been decided but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct PendingOpponentMove {
    /// Square the opponent will take.
    position: Position,
    /// Delay left before the move applies.
    remaining: Duration,
}

impl PendingOpponentMove {
    fn new(position: Position) -> Self {
        Self {
            position,
            remaining: OPPONENT_DELAY,
        }
    }

    /// Fraction of the delay still to run, from 1.0 (just decided) to 0.0.
    pub fn remaining_fraction(&self) -> f32 {
        self.remaining.as_secs_f32() / OPPONENT_DELAY.as_secs_f32()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Actor {
    Human,
    Opponent,
}

/// Owns the active game and sequences turns for one local session.
#[derive(Debug, Clone)]
pub struct SessionController<R = StdRng> {
    mode: GameMode,
    state: GameState,
    policy: OpponentPolicy<R>,
    pending: Option<PendingOpponentMove>,
}

impl<R: Rng> SessionController<R> {
    /// Creates a controller and starts a session in `mode`.
    #[instrument(skip(policy))]
    pub fn new(mode: GameMode, policy: OpponentPolicy<R>) -> Self {
        info!(%mode, "Starting session");
        Self {
            mode,
            state: GameState::new(),
            policy,
            pending: None,
        }
    }

    /// Starts a new session in `mode`, discarding the current game and any
    /// pending opponent move.
    #[instrument(skip(self))]
    pub fn start_session(&mut self, mode: GameMode) {
        info!(%mode, "Starting session");
        self.mode = mode;
        self.state.reset();
        self.pending = None;
    }

    /// Restarts the session in its current mode.
    pub fn reset_session(&mut self) {
        self.start_session(self.mode);
    }

    /// Submits a human move at `(row, col)`.
    ///
    /// Returns whether the move was applied. Out-of-range or occupied
    /// squares, moves after the game ended, and moves during the opponent's
    /// turn are ignored and leave the session untouched.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> bool {
        if self.state.status().is_terminal() {
            debug!("Ignoring move: game is over");
            return false;
        }
        if self.is_opponent_turn() {
            debug!("Ignoring move: opponent's turn");
            return false;
        }
        self.play_turn(row, col, Actor::Human)
    }

    /// Advances the session clock by `delta`.
    ///
    /// Applies the pending opponent move once its delay has fully elapsed.
    /// Returns whether a move was applied during this call.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        pending.remaining = pending.remaining.saturating_sub(delta);
        if !pending.remaining.is_zero() {
            return false;
        }

        let position = pending.position;
        self.pending = None;
        self.play_turn(position.row(), position.col(), Actor::Opponent)
    }

    /// Returns the active game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board of the active game.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the session mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the opponent's decided-but-unapplied move, if any.
    pub fn pending_move(&self) -> Option<&PendingOpponentMove> {
        self.pending.as_ref()
    }

    /// Fraction of the opponent's thinking delay already elapsed (0.0-1.0),
    /// or `None` when no opponent move is pending.
    pub fn thinking_progress(&self) -> Option<f32> {
        self.pending
            .as_ref()
            .map(|p| (1.0 - p.remaining_fraction()).clamp(0.0, 1.0))
    }

    /// True when the scripted opponent holds the turn.
    pub fn is_opponent_turn(&self) -> bool {
        self.mode == GameMode::HumanVsOpponent
            && self.state.status() == GameStatus::InProgress
            && self.state.current_player() == OPPONENT_MARK
    }

    fn play_turn(&mut self, row: usize, col: usize, actor: Actor) -> bool {
        let player = self.state.current_player();
        if let Err(error) = self.state.apply_move(row, col, player) {
            debug!(%error, ?actor, "Ignoring move");
            return false;
        }

        match self.state.end_turn().outcome() {
            None => {
                if actor == Actor::Human && self.is_opponent_turn() {
                    self.schedule_opponent_move();
                }
            }
            Some(outcome) => info!(
                %outcome,
                winner = ?outcome.winner(),
                draw = outcome.is_draw(),
                "Game over"
            ),
        }
        true
    }

    fn schedule_opponent_move(&mut self) {
        match self
            .policy
            .select_move(&self.state, OPPONENT_MARK, OPPONENT_MARK.opponent())
        {
            Some(position) => {
                debug!(%position, delay = ?OPPONENT_DELAY, "Opponent move scheduled");
                self.pending = Some(PendingOpponentMove::new(position));
            }
            None => warn!("Opponent found no legal move"),
        }
    }
}
