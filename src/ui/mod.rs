//! UI module - text front ends over the game state
//!
//! - **game_ui**: Move list and clock views, rebuilt when the session changes
//! - **console**: Command grammar for the terminal front end

pub mod console;
pub mod game_ui;

pub use console::*;
pub use game_ui::*;
