//! Board representation shared by the move applier and the referee
//!
//! The board is held twice: a sparse map from square to piece, which is what
//! the rest of the game reads, and a dense 8x8 grid indexed `[y][x]`, which is
//! what the referee inspects. Every write goes through [`BoardPieces`] so the
//! two never disagree.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::game::components::{PieceColor, PieceId, PieceType};
use crate::game::types::Square;

/// Dense board snapshot, `grid[y][x]`
pub type BoardGrid = [[Option<PieceId>; 8]; 8];

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Resource holding the current piece placement
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct BoardPieces {
    pieces: HashMap<Square, PieceId>,
    grid: BoardGrid,
}

impl Default for BoardPieces {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl BoardPieces {
    /// Board with no pieces on it
    pub fn empty() -> Self {
        Self {
            pieces: HashMap::new(),
            grid: Default::default(),
        }
    }

    /// Standard chess starting position
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        for (file, kind) in BACK_ROW.iter().enumerate() {
            let file = file as u8;
            for (color, back_rank, pawn_rank) in [
                (PieceColor::White, 0, 1),
                (PieceColor::Black, 7, 6),
            ] {
                if let Ok(square) = Square::new(file, back_rank) {
                    board.place(square, PieceId::new(*kind, color));
                }
                if let Ok(square) = Square::new(file, pawn_rank) {
                    board.place(square, PieceId::new(PieceType::Pawn, color));
                }
            }
        }

        board
    }

    /// Build a board from `(square, piece)` pairs
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, PieceId)>,
    {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            board.place(square, piece);
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<&PieceId> {
        self.pieces.get(&square)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        !self.pieces.contains_key(&square)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn grid(&self) -> &BoardGrid {
        &self.grid
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Square, &PieceId)> {
        self.pieces.iter()
    }

    /// Put `piece` on `square`, replacing whatever stood there
    pub fn place(&mut self, square: Square, piece: PieceId) -> Option<PieceId> {
        let (x, y) = square.coords();
        self.grid[y as usize][x as usize] = Some(piece.clone());
        self.pieces.insert(square, piece)
    }

    /// Take the piece off `square`
    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        let (x, y) = square.coords();
        self.grid[y as usize][x as usize] = None;
        self.pieces.remove(&square)
    }

    /// Move whatever is on `from` to `to`, returning the piece it displaced
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<PieceId> {
        let piece = self.remove(from)?;
        self.place(to, piece)
    }

    pub fn reset(&mut self) {
        *self = Self::starting_position();
    }
}
