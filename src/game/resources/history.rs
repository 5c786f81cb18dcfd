//! Reversible move log with redo stack
//!
//! Keeps every applied [`MoveRecord`] in order so that moves can be taken
//! back exactly, plus the stack of taken-back moves that may be replayed.
//!
//! # Undo / Redo
//!
//! ```text
//! record(a) record(b) record(c)   log = [a b c]  redo = []
//! undo_last() -> c                log = [a b]    redo = [c]
//! undo_last() -> b                log = [a]      redo = [c b]
//! redo_last() -> b                log = [a b]    redo = [c]
//! record(d)                       log = [a b d]  redo = []
//! ```
//!
//! Recording a new move collapses the redo stack: once history diverges, the
//! old future is gone.
//!
//! The history hands records back to the caller; inverting the board is the
//! move applier's job.

use crate::game::components::MoveRecord;

/// Applied moves and the redo stack
///
/// `can_undo` and `can_redo` are computed from the two sequences, never
/// stored, so they cannot drift.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Append a freshly applied move and discard the redo stack
    pub fn record(&mut self, entry: MoveRecord) {
        self.moves.push(entry);
        self.redo_stack.clear();
    }

    /// Take back the last applied move
    ///
    /// Returns `None` without touching anything when there is nothing to undo.
    /// The returned record is a copy of the one now sitting on the redo stack.
    pub fn undo_last(&mut self) -> Option<MoveRecord> {
        let record = self.moves.pop()?;
        self.redo_stack.push(record.clone());
        Some(record)
    }

    /// Replay the most recently taken-back move
    ///
    /// Returns `None` without touching anything when the redo stack is empty.
    pub fn redo_last(&mut self) -> Option<MoveRecord> {
        let record = self.redo_stack.pop()?;
        self.moves.push(record.clone());
        Some(record)
    }

    pub fn can_undo(&self) -> bool {
        !self.moves.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Get a specific move by ply index (0 = white's first move)
    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    /// Number of applied half-moves
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of moves waiting on the redo stack
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Next record `redo_last` would return
    pub fn peek_redo(&self) -> Option<&MoveRecord> {
        self.redo_stack.last()
    }

    /// Iterate over applied moves in chronological order
    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }

    /// Clear both sequences (for starting a new game)
    pub fn clear(&mut self) {
        self.moves.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Square;

    fn record(from: &str, to: &str, piece: &str, captured: Option<&str>) -> MoveRecord {
        MoveRecord::new(
            Square::from_algebraic(from).unwrap(),
            Square::from_algebraic(to).unwrap(),
            piece.into(),
            captured.map(Into::into),
        )
    }

    fn opening() -> MoveHistory {
        let mut history = MoveHistory::default();
        history.record(record("e2", "e4", "pawn_white", None));
        history.record(record("e7", "e5", "pawn_black", None));
        history.record(record("g1", "f3", "knight_white", None));
        history
    }

    #[test]
    fn test_move_history_default() {
        //! Verifies MoveHistory starts empty
        let history = MoveHistory::default();

        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last_move().is_none());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_appends_in_order() {
        let history = opening();

        assert_eq!(history.len(), 3);
        assert_eq!(history.get_move(0).unwrap().notation, "e4");
        assert_eq!(history.get_move(1).unwrap().notation, "e5");
        assert_eq!(history.last_move().unwrap().notation, "Nf3");
        assert!(history.get_move(3).is_none());

        let notations: Vec<&str> = history.iter().map(|m| m.notation.as_str()).collect();
        assert_eq!(notations, ["e4", "e5", "Nf3"]);
    }

    #[test]
    fn test_undo_moves_record_to_redo_stack() {
        let mut history = opening();

        let undone = history.undo_last().unwrap();
        assert_eq!(undone.notation, "Nf3");
        assert_eq!(history.len(), 2);
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.peek_redo(), Some(&undone));
        assert!(history.can_redo());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = MoveHistory::default();
        assert!(history.undo_last().is_none());
        assert_eq!(history, MoveHistory::default());
    }

    #[test]
    fn test_redo_on_empty_stack_is_noop() {
        let mut history = opening();
        let before = history.clone();

        assert!(history.redo_last().is_none());
        assert_eq!(history, before);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = opening();
        let before = history.clone();

        history.undo_last();
        history.undo_last();
        assert_eq!(history.redo_len(), 2);

        assert_eq!(history.redo_last().unwrap().notation, "e5");
        assert_eq!(history.redo_last().unwrap().notation, "Nf3");
        assert_eq!(history, before);
    }

    #[test]
    fn test_record_after_undo_clears_redo_stack() {
        let mut history = opening();
        history.undo_last();
        history.undo_last();

        history.record(record("d7", "d5", "pawn_black", None));

        assert_eq!(history.redo_len(), 0);
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.last_move().unwrap().notation, "d5");
    }

    #[test]
    fn test_captured_piece_survives_undo() {
        let mut history = MoveHistory::default();
        history.record(record("d1", "d7", "queen_white", Some("pawn_black")));

        let undone = history.undo_last().unwrap();
        assert_eq!(undone.captured.as_ref().map(|p| p.as_str()), Some("pawn_black"));
    }

    #[test]
    fn test_flags_follow_sequences() {
        let mut history = MoveHistory::default();
        let check = |h: &MoveHistory| {
            assert_eq!(h.can_undo(), h.len() > 0);
            assert_eq!(h.can_redo(), h.redo_len() > 0);
        };

        check(&history);
        history.record(record("e2", "e4", "pawn_white", None));
        check(&history);
        history.undo_last();
        check(&history);
        history.redo_last();
        check(&history);
        history.undo_last();
        history.record(record("d2", "d4", "pawn_white", None));
        check(&history);
    }

    #[test]
    fn test_clear_removes_all_moves() {
        let mut history = opening();
        history.undo_last();
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.redo_len(), 0);
    }
}
