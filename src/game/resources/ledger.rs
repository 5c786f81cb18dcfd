//! Move ledger - the numbered move list shown to players
//!
//! Half-moves are paired into full moves: white's move opens a new pair and
//! black's reply fills it. Only the last pair may be missing its black half.
//!
//! ```text
//! 1. e4  e5
//! 2. Nf3 Nc6
//! 3. Bc4          <- white has moved, black to play
//! ```
//!
//! The ledger only knows notation strings. Which move to take back is the
//! business of [`super::MoveHistory`]; the ledger just unwinds its pairing.

use crate::game::components::MovePair;

/// Display-facing move list plus the ply counter
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveLedger {
    pairs: Vec<MovePair>,
    current_move: u32,
}

impl MoveLedger {
    /// Slot `notation` into the list and count one ply
    pub fn add_move(&mut self, notation: impl Into<String>) {
        self.insert(notation.into());
        self.current_move += 1;
    }

    /// Unwind the last half-move
    ///
    /// Clears black's half if present, otherwise drops the whole pair.
    pub fn undo(&mut self) {
        if let Some(last) = self.pairs.last_mut() {
            if last.black.is_some() {
                last.black = None;
            } else {
                self.pairs.pop();
            }
        }
        self.current_move = self.current_move.saturating_sub(1);
    }

    /// Re-insert a half-move previously taken back
    pub fn redo(&mut self, notation: impl Into<String>) {
        self.add_move(notation);
    }

    fn insert(&mut self, notation: String) {
        match self.pairs.last_mut() {
            Some(last) if last.black.is_none() => last.black = Some(notation),
            _ => self.pairs.push(MovePair {
                white: Some(notation),
                black: None,
            }),
        }
    }

    pub fn pairs(&self) -> &[MovePair] {
        &self.pairs
    }

    pub fn last_pair(&self) -> Option<&MovePair> {
        self.pairs.last()
    }

    /// Plies applied so far
    pub fn current_move(&self) -> u32 {
        self.current_move
    }

    /// Number of full-move entries
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
        self.current_move = 0;
    }
}
