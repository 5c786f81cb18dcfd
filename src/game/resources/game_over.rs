//! Game over state tracking
//!
//! Only the end conditions this crate can observe on its own are modelled:
//! a player forfeiting and a clock running out. Checkmate and stalemate are
//! the external rules engine's business.
//!
//! # State Transitions
//!
//! ```text
//! Playing → Forfeit { loser } / TimeExpired { loser }
//! any     → Playing            (new game)
//! ```
//!
//! Once the game is over the clock is frozen and move input is ignored.

use bevy::prelude::*;

use crate::game::components::PieceColor;

/// Resource tracking the game's end state
#[derive(Resource, Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// `loser` resigned
    Forfeit { loser: PieceColor },

    /// `loser`'s clock reached zero
    TimeExpired { loser: PieceColor },
}

impl GameOverState {
    /// Returns `true` for any non-Playing state
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Human-readable description of the result
    pub fn message(&self) -> &'static str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::Forfeit {
                loser: PieceColor::Black,
            } => "White wins by forfeit!",
            GameOverState::Forfeit {
                loser: PieceColor::White,
            } => "Black wins by forfeit!",
            GameOverState::TimeExpired {
                loser: PieceColor::Black,
            } => "White wins on time!",
            GameOverState::TimeExpired {
                loser: PieceColor::White,
            } => "Black wins on time!",
        }
    }

    /// Winner of the game, if it has ended
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::Playing => None,
            GameOverState::Forfeit { loser } | GameOverState::TimeExpired { loser } => {
                Some(loser.opponent())
            }
        }
    }
}
