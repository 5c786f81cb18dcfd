//! Chess game logic module - move, history and clock state machine
//!
//! Pure game state with a thin layer of ECS systems on top. The state types
//! in [`resources`] and [`rules`] work without a running app; the systems in
//! [`systems`] wire them to messages.
//!
//! # Module Organization
//!
//! - `types` - Squares, files, ranks
//! - `components` - Piece identities, move records, move pairs
//! - `resources` - Ledger, history, clock, session, game over, timer presets
//! - `rules` - Board placement and the referee boundary
//! - `systems` - Move applier, command handling, clock ticking
//! - `events` - Messages accepted from front ends
//! - `plugin` - GamePlugin that registers everything
//!
//! # Data Flow
//!
//! 1. Front ends write [`events::MoveAttempt`] and [`events::GameCommand`]
//! 2. Commands update the clock or queue undo/redo on the session
//! 3. The move applier validates and applies moves, then drains the queue
//! 4. The clock ticks for the side to move
//! 5. Views are rebuilt if anything changed

pub mod components;
pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
