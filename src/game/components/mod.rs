//! Chess game data types
//!
//! Plain data with no scheduling attached: piece identities and the move
//! records that flow between history, ledger and board.

pub mod game_state;
pub mod piece;

pub use game_state::*;
pub use piece::*;
