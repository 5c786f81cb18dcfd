//! Move records shared by the ledger, the history and the applier

use crate::game::components::PieceId;
use crate::game::types::Square;

/// Everything needed to invert or replay one applied move
///
/// Records are created once by the move applier and never edited. They move
/// between the history and its redo stack by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceId,
    pub captured: Option<PieceId>,
    pub notation: String,
}

impl MoveRecord {
    pub fn new(from: Square, to: Square, piece: PieceId, captured: Option<PieceId>) -> Self {
        let notation = notation_for(&piece, to);
        Self {
            from,
            to,
            piece,
            captured,
            notation,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Simplified notation: piece symbol followed by the destination
///
/// No disambiguation, capture marker or check suffix. Pawns and pieces of
/// unknown kind get no symbol.
pub fn notation_for(piece: &PieceId, to: Square) -> String {
    match piece.kind().and_then(|kind| kind.symbol()) {
        Some(symbol) => format!("{symbol}{to}"),
        None => to.to_string(),
    }
}

/// One numbered full move: white's half and, once played, black's reply
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovePair {
    pub white: Option<String>,
    pub black: Option<String>,
}

impl MovePair {
    pub fn is_complete(&self) -> bool {
        self.white.is_some() && self.black.is_some()
    }
}
