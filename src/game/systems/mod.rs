//! Chess game systems module - ECS logic implementation
//!
//! # System Organization
//!
//! - [`input`] - Game commands (pause, forfeit, new game, undo/redo requests)
//! - [`movement`] - [`MoveApplier`] and the systems feeding it
//! - [`game_logic`] - Clock ticking and time expiry
//!
//! # System Execution Order
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  GameCommand messages
//! │                 │  → clock, game over state, request queue
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Execution       │  MoveAttempt messages, then queued undo/redo
//! │                 │  → board, history, ledger, turn
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Clock           │  Frame time → whole seconds for the side to move
//! │                 │  → TimeExpired when a timed clock hits zero
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Views           │  Move list and clock strings
//! └─────────────────┘
//! ```
//!
//! # Testing Strategy
//!
//! Systems are tested through Bevy's App harness by writing messages into the
//! world and running frames:
//!
//! ```rust,ignore
//! let mut app = App::new();
//! app.add_plugins(GamePlugin::default());
//! app.world_mut().write_message(MoveAttempt::new("e2", "e4"));
//! app.update();
//! ```

pub mod game_logic;
pub mod input;
pub mod movement;

pub use game_logic::*;
pub use input::*;
pub use movement::*;
