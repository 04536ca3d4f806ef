//! Scripted opponent: win, else block, else a random empty square.
//!
//! This is a fixed two-ply heuristic, not a game-tree search. It never
//! sets up forks and will not see a double threat coming; it only takes an
//! immediate win or blocks an immediate loss.

use super::rules;
use super::{Board, GameState, Outcome, Player, Position, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Which tier of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Tier {
    /// Completes a line for the opponent itself.
    #[display("win")]
    Win,
    /// Stops the other player completing a line next turn.
    #[display("block")]
    Block,
    /// Uniform pick among the empty squares.
    #[display("random")]
    Random,
}

/// Move selection for the scripted opponent.
///
/// Holds no game state; the random source is its only dependency and is
/// supplied by the caller so tests can pin the fallback choice.
#[derive(Debug, Clone)]
pub struct OpponentPolicy<R = StdRng> {
    rng: R,
}

impl OpponentPolicy<StdRng> {
    /// Creates a policy with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a policy seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> OpponentPolicy<R> {
    /// Creates a policy drawing fallback choices from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks a move for `me` against `opponent`, or `None` on a full board.
    #[instrument(skip(self, state))]
    pub fn select_move(&mut self, state: &GameState, me: Player, opponent: Player) -> Option<Position> {
        self.select_move_with_tier(state, me, opponent).map(|(pos, _)| pos)
    }

    /// Like [`OpponentPolicy::select_move`], also reporting the deciding tier.
    pub fn select_move_with_tier(
        &mut self,
        state: &GameState,
        me: Player,
        opponent: Player,
    ) -> Option<(Position, Tier)> {
        let board = state.board();

        if let Some(pos) = find_completing_square(board, me) {
            debug!(position = %pos, "Taking the win");
            return Some((pos, Tier::Win));
        }

        if let Some(pos) = find_completing_square(board, opponent) {
            debug!(position = %pos, "Blocking");
            return Some((pos, Tier::Block));
        }

        let empties = board.empty_positions();
        if empties.is_empty() {
            return None;
        }
        let pos = empties[self.rng.random_range(0..empties.len())];
        debug!(position = %pos, candidates = empties.len(), "Random fallback");
        Some((pos, Tier::Random))
    }
}

/// First empty square (row-major) where placing `player` wins outright.
///
/// Each candidate is tried on a scratch copy of the board, so the caller's
/// board is never touched.
fn find_completing_square(board: &Board, player: Player) -> Option<Position> {
    let mut scratch = *board;
    board.empty_positions().into_iter().find(|&pos| {
        scratch.set(pos, Square::Occupied(player));
        let wins = rules::evaluate_terminal(&scratch) == Some(Outcome::Winner(player));
        scratch.set(pos, Square::Empty);
        wins
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_from(rows: [&str; 3]) -> GameState {
        // Marks go straight onto the board; turns are never settled here.
        let mut xs = Vec::new();
        let mut os = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => xs.push((row, col)),
                    'O' => os.push((row, col)),
                    _ => {}
                }
            }
        }
        let mut game = GameState::new();
        for (player, cells) in [(Player::X, &xs), (Player::O, &os)] {
            for &(row, col) in cells.iter() {
                game.apply_move(row, col, player).expect("free square");
            }
        }
        game
    }

    #[test]
    fn test_win_preferred_over_block() {
        let game = game_from(["OO.", "XX.", "..."]);
        let mut policy = OpponentPolicy::seeded(7);
        assert_eq!(
            policy.select_move_with_tier(&game, Player::O, Player::X),
            Some((Position::TopRight, Tier::Win))
        );
    }

    #[test]
    fn test_blocks_threat() {
        let game = game_from(["XX.", "...", "..."]);
        let mut policy = OpponentPolicy::seeded(7);
        assert_eq!(
            policy.select_move_with_tier(&game, Player::O, Player::X),
            Some((Position::TopRight, Tier::Block))
        );
    }

    #[test]
    fn test_first_winning_square_in_scan_order() {
        // O can win at (0,2) via the top row or at (2,0) via the left column.
        let game = game_from(["OO.", "OXX", ".XX"]);
        let mut policy = OpponentPolicy::seeded(1);
        assert_eq!(
            policy.select_move(&game, Player::O, Player::X),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_lookahead_leaves_state_untouched() {
        let game = game_from(["XX.", ".O.", "..."]);
        let before = game.clone();
        let mut policy = OpponentPolicy::seeded(3);
        policy.select_move(&game, Player::O, Player::X);
        assert_eq!(game, before);
    }

    #[test]
    fn test_random_fallback_picks_empty_square() {
        let game = game_from(["X..", "...", "..."]);
        for seed in 0..32 {
            let mut policy = OpponentPolicy::seeded(seed);
            let (pos, tier) = policy
                .select_move_with_tier(&game, Player::O, Player::X)
                .expect("board has empty squares");
            assert_eq!(tier, Tier::Random);
            assert!(game.board().is_empty(pos));
        }
    }

    #[test]
    fn test_random_fallback_varies_with_seed() {
        let game = GameState::new();
        let picks: std::collections::HashSet<Position> = (0..64)
            .filter_map(|seed| OpponentPolicy::seeded(seed).select_move(&game, Player::O, Player::X))
            .collect();
        assert!(picks.len() >= 5, "only {} distinct squares", picks.len());
    }

    #[test]
    fn test_same_seed_same_choice() {
        let game = GameState::new();
        let a = OpponentPolicy::seeded(42).select_move(&game, Player::O, Player::X);
        let b = OpponentPolicy::seeded(42).select_move(&game, Player::O, Player::X);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_board_yields_none() {
        // X O X / X O O / O X X
        let game = game_from(["XOX", "XOO", "OXX"]);
        let mut policy = OpponentPolicy::seeded(0);
        assert_eq!(policy.select_move(&game, Player::O, Player::X), None);
    }
}
