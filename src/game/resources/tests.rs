//! Resource module unit tests
//!
//! Cross-resource checks that the ledger, the history and the clock stay in
//! step when driven together through [`GameSession`]. Board inversion is
//! covered by the applier tests; these only touch the data structures.

use super::*;
use crate::game::components::{MoveRecord, PieceColor};
use crate::game::types::Square;

const OPENING: [(&str, &str, &str); 6] = [
    ("e2", "e4", "pawn_white"),
    ("e7", "e5", "pawn_black"),
    ("g1", "f3", "knight_white"),
    ("b8", "c6", "knight_black"),
    ("f1", "c4", "bishop_white"),
    ("g8", "f6", "knight_black"),
];

fn play(session: &mut GameSession, from: &str, to: &str, piece: &str) {
    let record = MoveRecord::new(
        Square::from_algebraic(from).unwrap(),
        Square::from_algebraic(to).unwrap(),
        piece.into(),
        None,
    );
    session.add_move(record.notation.clone());
    session.add_move_details(record);
    session.clock_mut().change_turn(None);
}

fn play_opening(session: &mut GameSession, plies: usize) {
    for (from, to, piece) in OPENING.iter().take(plies) {
        play(session, from, to, piece);
    }
}

/// Every pair but the last is complete
fn assert_pairing(ledger: &MoveLedger) {
    let pairs = ledger.pairs();
    for pair in pairs.iter().take(pairs.len().saturating_sub(1)) {
        assert!(pair.is_complete(), "only the last pair may be open: {pairs:?}");
    }
    assert_eq!(
        pairs.len(),
        (ledger.current_move() as usize).div_ceil(2),
        "pair count follows ply count"
    );
}

// ============================================================================
// Counter agreement
// ============================================================================

#[test]
fn test_counter_matches_log_length() {
    //! After N applied moves the ply counter and the reversible log agree
    for n in 0..=OPENING.len() {
        let mut session = GameSession::default();
        play_opening(&mut session, n);

        assert_eq!(session.current_move() as usize, n);
        assert_eq!(session.history().len(), n);
        assert_pairing(session.ledger());
    }
}

#[test]
fn test_counter_tracks_undo_and_redo() {
    let mut session = GameSession::default();
    play_opening(&mut session, 5);

    for expected in (2..5).rev() {
        session.undo_last();
        assert_eq!(session.current_move(), expected);
        assert_eq!(session.history().len(), expected as usize);
        assert_pairing(session.ledger());
    }

    session.redo_last();
    assert_eq!(session.current_move(), 3);
    assert_eq!(session.history().len(), 3);
    assert_pairing(session.ledger());
}

// ============================================================================
// Undo / redo identity
// ============================================================================

#[test]
fn test_undo_all_then_redo_all_restores_ledger() {
    let mut session = GameSession::default();
    play_opening(&mut session, OPENING.len());
    let ledger_before = session.ledger().clone();
    let history_before = session.history().clone();

    while session.undo_last().is_some() {}
    assert!(session.ledger().is_empty());
    assert_eq!(session.current_move(), 0);

    while session.redo_last().is_some() {}
    assert_eq!(session.ledger(), &ledger_before);
    assert_eq!(session.history(), &history_before);
}

#[test]
fn test_over_undo_is_harmless() {
    //! More undos than moves never drives the counter below zero
    let mut session = GameSession::default();
    play_opening(&mut session, 2);

    for _ in 0..5 {
        session.undo_last();
    }

    assert_eq!(session.current_move(), 0);
    assert!(session.ledger().is_empty());
    assert_eq!(session.history().redo_len(), 2);
}

#[test]
fn test_new_move_after_undo_drops_future() {
    let mut session = GameSession::default();
    play_opening(&mut session, 4);
    session.undo_last();
    session.undo_last();

    play(&mut session, "d2", "d4", "pawn_white");

    assert!(!session.can_redo());
    assert_eq!(session.current_move(), 3);
    let last = session.ledger().last_pair().unwrap();
    assert_eq!(last.white.as_deref(), Some("d4"));
    assert_eq!(last.black, None);
}

// ============================================================================
// Clock alongside moves
// ============================================================================

#[test]
fn test_turn_alternates_with_moves() {
    let mut session = GameSession::new(Some(300));
    play_opening(&mut session, 3);

    assert_eq!(session.clock().side_to_move(), PieceColor::Black);
    assert_eq!(session.clock().white_seconds(), 300);
}

#[test]
fn test_untimed_session_clock_never_moves() {
    let mut session = GameSession::default();
    play_opening(&mut session, 4);
    for _ in 0..10 {
        session.clock_mut().tick();
    }

    let clock = session.clock();
    assert_eq!(clock.selected_seconds(), None);
    assert_eq!(clock.white_seconds(), 0);
    assert_eq!(clock.black_seconds(), 0);
    assert!(!clock.is_running());
}

#[test]
fn test_selection_feeds_new_game() {
    let mut selection = TimerSelection::default();
    let mut session = GameSession::default();

    let seconds = selection.toggle(0);
    session.clock_mut().select_seconds(seconds);
    play_opening(&mut session, 2);
    session.new_game();

    assert_eq!(session.clock().selected_seconds(), Some(300));
    assert_eq!(format_clock(session.clock().white_seconds()), "05:00");
    assert!(session.clock().is_white_turn());
}
