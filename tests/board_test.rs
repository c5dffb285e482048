//! Tests for the board controller's turn-cycle state machine.

use pairup::{BoardController, CardFace, CardId, ClickOutcome, Flippable, IgnoreReason, TurnPhase};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::HashMap;

fn board(pairs: usize, seed: u64) -> BoardController {
    let mut rng = SmallRng::seed_from_u64(seed);
    BoardController::new(pairs, &mut rng).expect("deal failed")
}

/// Card ids grouped into matching pairs.
fn pairs_by_face(board: &BoardController) -> Vec<(CardId, CardId)> {
    let mut groups: HashMap<CardFace, Vec<CardId>> = HashMap::new();
    for card in board.cards() {
        groups.entry(*card.face()).or_default().push(card.id());
    }
    groups.into_values().map(|ids| (ids[0], ids[1])).collect()
}

/// Two card ids with different faces.
fn mismatched_ids(board: &BoardController) -> (CardId, CardId) {
    let first = &board.cards()[0];
    let other = board
        .cards()
        .iter()
        .find(|c| c.face() != first.face())
        .expect("board needs at least two pairs");
    (first.id(), other.id())
}

#[test]
fn test_first_click_selects() {
    let mut board = board(6, 1);
    assert_eq!(board.phase(), TurnPhase::Idle);

    assert_eq!(board.click(0), ClickOutcome::Selected);
    assert_eq!(board.phase(), TurnPhase::OneSelected);
    assert_eq!(board.total_clicks(), 1);
    assert!(board.card(0).expect("card").is_face_up());
}

#[test]
fn test_reclicking_first_selection_is_noop() {
    let mut board = board(6, 2);
    board.click(0);

    assert_eq!(
        board.click(0),
        ClickOutcome::Ignored(IgnoreReason::AlreadyFaceUp)
    );
    assert_eq!(board.total_clicks(), 1);
    assert_eq!(board.phase(), TurnPhase::OneSelected);
}

#[test]
fn test_clicking_matched_face_up_card_is_noop() {
    let mut board = board(6, 3);
    let (a, b) = pairs_by_face(&board)[0];
    board.click(a);
    assert_eq!(board.click(b), ClickOutcome::Matched);

    assert_eq!(
        board.click(a),
        ClickOutcome::Ignored(IgnoreReason::AlreadyFaceUp)
    );
    assert_eq!(board.total_clicks(), 2);
}

#[test]
fn test_matched_pair_stays_face_up() {
    let mut board = board(6, 4);
    let (a, b) = pairs_by_face(&board)[0];

    board.click(a);
    assert_eq!(board.click(b), ClickOutcome::Matched);
    assert_eq!(board.phase(), TurnPhase::Idle);
    assert!(board.card(a).expect("card").is_face_up());
    assert!(board.card(b).expect("card").is_face_up());
}

#[test]
fn test_mismatch_holds_lock_and_drops_clicks() {
    let mut board = board(6, 5);
    let (a, b) = mismatched_ids(&board);

    board.click(a);
    let outcome = board.click(b);
    assert_eq!(outcome, ClickOutcome::Mismatch { generation: 0 });
    assert_eq!(board.phase(), TurnPhase::Evaluating);

    // Any click while the lock is held is dropped, not queued.
    let (_, other) = pairs_by_face(&board)[0];
    assert_eq!(board.click(other), ClickOutcome::Ignored(IgnoreReason::Locked));
    assert_eq!(board.total_clicks(), 2);
}

#[test]
fn test_resolve_mismatch_flips_back_and_releases_lock() {
    let mut board = board(6, 6);
    let (a, b) = mismatched_ids(&board);
    board.click(a);
    board.click(b);

    assert!(board.resolve_mismatch(board.generation()));
    assert_eq!(board.phase(), TurnPhase::Idle);
    assert!(!board.card(a).expect("card").is_face_up());
    assert!(!board.card(b).expect("card").is_face_up());
    assert_eq!(board.total_clicks(), 2);
}

#[test]
fn test_resolve_without_pending_mismatch_is_noop() {
    let mut board = board(6, 7);
    assert!(!board.resolve_mismatch(board.generation()));
}

#[test]
fn test_stale_generation_cannot_touch_restarted_board() {
    let mut board = board(6, 8);
    let (a, b) = mismatched_ids(&board);
    board.click(a);
    let ClickOutcome::Mismatch { generation } = board.click(b) else {
        panic!("expected mismatch");
    };

    let mut rng = SmallRng::seed_from_u64(99);
    board.restart(6, &mut rng).expect("restart failed");

    // The timer from the previous board fires after the restart.
    assert!(!board.resolve_mismatch(generation));
    assert_eq!(board.total_clicks(), 0);
    assert_eq!(board.phase(), TurnPhase::Idle);
    assert!(board.cards().iter().all(|c| !c.is_face_up()));
}

#[test]
fn test_win_exactly_when_all_face_up() {
    let mut board = board(6, 9);
    let pairs = pairs_by_face(&board);

    for (i, (a, b)) in pairs.iter().enumerate() {
        board.click(*a);
        let outcome = board.click(*b);
        if i + 1 < pairs.len() {
            assert_eq!(outcome, ClickOutcome::Matched);
            assert!(!board.game_over());
        } else {
            assert_eq!(outcome, ClickOutcome::Won { total_clicks: 12 });
        }
    }

    assert!(board.game_over());
    assert_eq!(board.phase(), TurnPhase::Won);
    assert_eq!(board.total_clicks(), 12);
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let mut board = board(2, 10);
    for (a, b) in pairs_by_face(&board) {
        board.click(a);
        board.click(b);
    }
    assert!(board.game_over());

    assert_eq!(
        board.click(0),
        ClickOutcome::Ignored(IgnoreReason::GameFinished)
    );
    assert_eq!(board.total_clicks(), 4);
}

#[test]
fn test_restart_resets_everything() {
    let mut board = board(2, 11);
    for (a, b) in pairs_by_face(&board) {
        board.click(a);
        board.click(b);
    }
    assert!(board.game_over());

    let mut rng = SmallRng::seed_from_u64(42);
    board.restart(2, &mut rng).expect("restart failed");

    assert!(!board.game_over());
    assert_eq!(board.total_clicks(), 0);
    assert_eq!(board.phase(), TurnPhase::Idle);
    assert_eq!(board.generation(), 1);
    assert_eq!(board.cards().len(), 4);
    assert!(board.cards().iter().all(|c| !c.is_face_up()));
}

#[test]
fn test_empty_board_is_never_won() {
    let mut board = board(0, 12);
    assert!(!board.game_over());
    assert_eq!(
        board.click(0),
        ClickOutcome::Ignored(IgnoreReason::NoSuchCard)
    );
}

#[test]
fn test_click_out_of_range_is_ignored() {
    let mut board = board(6, 13);
    assert_eq!(
        board.click(100),
        ClickOutcome::Ignored(IgnoreReason::NoSuchCard)
    );
    assert_eq!(board.total_clicks(), 0);
}
