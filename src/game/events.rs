//! Messages fed into the game by input sources
//!
//! Both messages are plain requests. Nothing is applied until the execution
//! systems read them, so a console, a GUI and a test harness all drive the
//! game the same way.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::error::GameResult;
use crate::game::types::Square;

/// A player asks to move whatever stands on `from` to `to`
///
/// Squares stay as text until they are handled so that malformed input is
/// reported as [`crate::game::error::GameError::InvalidSquare`] at the same
/// point as every other rejection.
#[derive(Message, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAttempt {
    pub from: String,
    pub to: String,
}

impl MoveAttempt {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parse both squares
    pub fn squares(&self) -> GameResult<(Square, Square)> {
        Ok((
            Square::from_algebraic(&self.from)?,
            Square::from_algebraic(&self.to)?,
        ))
    }
}

/// Game controls other than moving a piece
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameCommand {
    /// Queue an undo of the last move
    Undo,
    /// Queue a redo of the last undone move
    Redo,
    /// Pause or resume the clock
    TogglePause,
    /// The side to move resigns
    Forfeit,
    /// Reset board, history and clock, keeping the time control
    NewGame,
    /// Choose a time control in seconds, `None` for untimed
    SelectTimer(Option<u32>),
    /// Toggle a time control preset by index
    TogglePreset(usize),
}
