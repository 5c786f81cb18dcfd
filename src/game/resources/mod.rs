//! Chess game resources - Global game state management
//!
//! Resources are ECS singletons shared by every system that needs them.
//! Only [`GameSession`], [`GameOverState`], [`TimerSelection`] and
//! [`ClockTicker`] are resources themselves; the ledger, the history and the
//! clock live inside the session so they can only change together.
//!
//! # Resource Categories
//!
//! ## Game History
//! - [`MoveLedger`] - Paired move list with the half-move counter
//! - [`MoveHistory`] - Reversible move log and redo stack
//!
//! ## Game Timing
//! - [`TurnClock`] - Side to move and per-player countdowns
//! - [`ClockTicker`] - Frame time to whole-second ticks
//! - [`TimerSelection`] - Time control presets
//!
//! ## Game Status
//! - [`GameSession`] - Facade over history, ledger, clock and request queue
//! - [`GameOverState`] - Forfeit / time expiry
//!
//! # Integration
//!
//! All resources are registered in [`crate::game::plugin::GamePlugin`] and
//! accessed via system parameters:
//!
//! ```rust,ignore
//! fn my_system(session: Res<GameSession>) {
//!     if let Some(last_move) = session.history().last_move() {
//!         info!("Last move: {}", last_move.notation);
//!     }
//! }
//! ```

pub mod game_over;
pub mod history;
pub mod ledger;
pub mod selection;
pub mod session;
pub mod timer;

pub use game_over::GameOverState;
pub use history::MoveHistory;
pub use ledger::MoveLedger;
pub use selection::TimerSelection;
pub use session::{GameSession, HistoryRequest};
pub use timer::{format_clock, ClockTicker, TurnClock};

#[cfg(test)]
mod tests;
