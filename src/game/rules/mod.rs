//! Move legality boundary
//!
//! The game state machine does not decide which moves are legal. It asks a
//! [`Referee`] and applies whatever the referee accepts. Two referees ship
//! with the crate:
//!
//! - [`MovementReferee`] - piece movement patterns plus turn order derived
//!   from the move count (even count = white to move)
//! - [`PermissiveReferee`] - accepts everything, for tests and sandbox play
//!
//! Full rules (check, castling, promotion, en passant) belong to an external
//! engine plugged in through the same trait.
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece type
//! - `board_state` - Board map + grid kept in lockstep

pub mod board_state;
pub mod piece_moves;


use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::components::{PieceColor, PieceId};

pub use board_state::{BoardGrid, BoardPieces};
pub use piece_moves::get_possible_moves;

/// External legality check consulted before every move
pub trait Referee: Send + Sync {
    /// Number of moves applied so far, set before each query
    fn set_move_count(&mut self, count: u32);

    /// Whether `piece` may go from `from` to `to` on `grid`
    ///
    /// Coordinates are `(x, y)` grid indices. `destination` is the piece
    /// currently standing on `to`, if any.
    fn is_valid_move(
        &self,
        grid: &BoardGrid,
        from: (u8, u8),
        to: (u8, u8),
        piece: &PieceId,
        destination: Option<&PieceId>,
    ) -> bool;
}

/// Which built-in referee a game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefereeKind {
    #[default]
    Movement,
    Permissive,
}

impl RefereeKind {
    pub fn build(self) -> Box<dyn Referee> {
        match self {
            RefereeKind::Movement => Box::new(MovementReferee::default()),
            RefereeKind::Permissive => Box::new(PermissiveReferee),
        }
    }
}

/// Accepts every move
#[derive(Debug, Default, Clone, Copy)]
pub struct PermissiveReferee;

impl Referee for PermissiveReferee {
    fn set_move_count(&mut self, _count: u32) {}

    fn is_valid_move(
        &self,
        _grid: &BoardGrid,
        _from: (u8, u8),
        _to: (u8, u8),
        _piece: &PieceId,
        _destination: Option<&PieceId>,
    ) -> bool {
        true
    }
}

/// Movement patterns and alternating turns
///
/// Pieces of unknown kind or colour are refused.
#[derive(Debug, Default, Clone, Copy)]
pub struct MovementReferee {
    move_count: u32,
}

impl MovementReferee {
    pub fn side_to_move(&self) -> PieceColor {
        PieceColor::from_white_turn(self.move_count % 2 == 0)
    }
}

impl Referee for MovementReferee {
    fn set_move_count(&mut self, count: u32) {
        self.move_count = count;
    }

    fn is_valid_move(
        &self,
        grid: &BoardGrid,
        from: (u8, u8),
        to: (u8, u8),
        piece: &PieceId,
        _destination: Option<&PieceId>,
    ) -> bool {
        let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
            return false;
        };

        if color != self.side_to_move() {
            return false;
        }

        piece_moves::is_valid_move(kind, color, from, to, grid)
    }
}

/// Resource wrapping the active referee
#[derive(Resource)]
pub struct RefereeHandle(pub Box<dyn Referee>);

impl Default for RefereeHandle {
    fn default() -> Self {
        Self(RefereeKind::default().build())
    }
}

impl RefereeHandle {
    pub fn new(referee: impl Referee + 'static) -> Self {
        Self(Box::new(referee))
    }
}
