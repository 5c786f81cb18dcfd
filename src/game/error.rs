//! Error types for game module
//!
//! Errors here never end a game. Systems that consume them log a warning
//! and leave state unchanged.

use super::types::Square;

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Square identifier outside `a1`..`h8`
    #[error("Invalid square identifier: {square:?}")]
    InvalidSquare { square: String },

    /// Referee refused the move
    #[error("Invalid move from {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// No piece on the source square
    #[error("No piece at {square}")]
    EmptySquare { square: Square },

    /// Source and destination are the same square
    #[error("Piece on {square} cannot move onto itself")]
    SameSquare { square: Square },

    /// A move is already being applied
    #[error("Move from {from} to {to} ignored: another move is in progress")]
    MoveInProgress { from: Square, to: Square },

    /// The game has ended
    #[error("Game is over: {reason}")]
    GameOver { reason: String },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
