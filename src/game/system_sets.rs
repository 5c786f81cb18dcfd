//! System organization using SystemSets
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - Turn game commands into state changes and queued requests
//! 2. **Execution** - Apply move attempts, then drain undo/redo requests
//! 3. **Clock** - Tick the side to move and check for time expiry
//! 4. **Views** - Rebuild derived views when the session changed
//!
//! A move and an undo sent in the same frame therefore apply in that order,
//! and the clock always sees the turn owner the frame's moves left behind.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Systems: game command handling
    Input,

    /// Systems: move attempts, history requests
    Execution,

    /// Systems: clock ticking, time expiry
    Clock,

    /// Systems: move list and clock views
    Views,
}
