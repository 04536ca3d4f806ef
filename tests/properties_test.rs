//! Property tests over random move sequences.

use proptest::prelude::*;
use tic_tac_toe::{GameMode, GameStatus, OpponentPolicy, Player, SessionController};

/// Plays `picks` as indices into the empty squares until the game ends.
fn play(picks: &[usize]) -> Vec<SessionController> {
    let mut session = SessionController::new(GameMode::HumanVsHuman, OpponentPolicy::seeded(0));
    let mut snapshots = vec![session.clone()];
    for pick in picks {
        if session.status().is_terminal() {
            break;
        }
        let empties = session.state().board().empty_positions();
        let pos = empties[pick % empties.len()];
        assert!(session.submit_move(pos.row(), pos.col()));
        snapshots.push(session.clone());
    }
    snapshots
}

proptest! {
    #[test]
    fn mark_balance_holds(picks in prop::collection::vec(any::<usize>(), 0..9)) {
        for session in play(&picks) {
            let board = session.state().board();
            let diff = board.count(Player::X) as isize - board.count(Player::O) as isize;
            prop_assert!(diff == 0 || diff == 1);
            if session.status() == GameStatus::InProgress {
                let expected = if diff == 1 { Player::O } else { Player::X };
                prop_assert_eq!(session.current_player(), expected);
            }
        }
    }

    #[test]
    fn evaluate_terminal_is_pure(picks in prop::collection::vec(any::<usize>(), 0..9)) {
        for session in play(&picks) {
            let before = session.state().clone();
            let first = before.evaluate_terminal();
            prop_assert_eq!(before.evaluate_terminal(), first);
            prop_assert_eq!(session.state(), &before);
        }
    }

    #[test]
    fn terminal_status_matches_board(picks in prop::collection::vec(any::<usize>(), 9..12)) {
        let last = play(&picks).pop().unwrap();
        prop_assert!(last.status().is_terminal());
        prop_assert_eq!(last.status(), GameStatus::from(last.state().evaluate_terminal().unwrap()));
    }

    #[test]
    fn invalid_submit_leaves_state_unchanged(
        picks in prop::collection::vec(any::<usize>(), 0..9),
        row in 0usize..5,
        col in 0usize..5,
    ) {
        let mut session = play(&picks).pop().unwrap();
        if !session.state().is_valid_move(row, col) || session.status().is_terminal() {
            let before = session.state().clone();
            prop_assert!(!session.submit_move(row, col));
            prop_assert_eq!(session.state(), &before);
        }
    }
}
