//! Tests for the scripted opponent.

use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use tic_tac_toe::{GameState, OpponentPolicy, Player, Position, Tier};

/// Builds a game by placing marks directly; turn order is irrelevant here.
fn game_with(marks: &[(usize, usize, Player)]) -> GameState {
    let mut game = GameState::new();
    for &(row, col, player) in marks {
        game.apply_move(row, col, player).unwrap();
    }
    game
}

#[test]
fn test_win_preferred_over_block() {
    // O O .
    // X X .
    // . . .
    let game = game_with(&[
        (0, 0, Player::O),
        (0, 1, Player::O),
        (1, 0, Player::X),
        (1, 1, Player::X),
    ]);
    let mut policy = OpponentPolicy::seeded(3);
    assert_eq!(
        policy.select_move_with_tier(&game, Player::O, Player::X),
        Some((Position::TopRight, Tier::Win))
    );
}

#[test]
fn test_blocks_threat() {
    // X X .
    let game = game_with(&[(0, 0, Player::X), (0, 1, Player::X)]);
    let mut policy = OpponentPolicy::seeded(3);
    assert_eq!(
        policy.select_move_with_tier(&game, Player::O, Player::X),
        Some((Position::TopRight, Tier::Block))
    );
}

#[test]
fn test_random_fallback_picks_empty_square() {
    let game = game_with(&[(1, 1, Player::X)]);
    let mut policy = OpponentPolicy::new(StdRng::seed_from_u64(99));
    for _ in 0..20 {
        let (pos, tier) = policy
            .select_move_with_tier(&game, Player::O, Player::X)
            .unwrap();
        assert_eq!(tier, Tier::Random);
        assert!(game.board().is_empty(pos));
    }
}

#[test]
fn test_random_fallback_spreads_over_squares() {
    let game = GameState::new();
    let mut policy = OpponentPolicy::seeded(2024);
    let picks: HashSet<Position> = (0..200)
        .filter_map(|_| policy.select_move(&game, Player::O, Player::X))
        .collect();
    assert_eq!(picks.len(), 9);

    let game = game_with(&[(1, 1, Player::X), (0, 0, Player::O)]);
    let picks: HashSet<Position> = (0..64)
        .filter_map(|seed| OpponentPolicy::seeded(seed).select_move(&game, Player::O, Player::X))
        .collect();
    assert!(picks.len() > 1);
    assert!(picks.iter().all(|pos| game.board().is_empty(*pos)));
}

#[test]
fn test_same_seed_same_choices() {
    let game = GameState::new();
    let mut a = OpponentPolicy::seeded(42);
    let mut b = OpponentPolicy::seeded(42);
    for _ in 0..10 {
        assert_eq!(
            a.select_move(&game, Player::O, Player::X),
            b.select_move(&game, Player::O, Player::X)
        );
    }
}

#[test]
fn test_selection_does_not_mutate_state() {
    let game = game_with(&[(0, 0, Player::X), (2, 2, Player::O)]);
    let before = game.clone();
    let mut policy = OpponentPolicy::seeded(1);
    policy.select_move(&game, Player::O, Player::X);
    assert_eq!(game, before);
}
