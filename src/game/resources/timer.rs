//! Turn ownership and per-player countdown clocks
//!
//! # Clock States
//!
//! A single `is_running` flag gates both clocks; only the side whose turn it
//! is counts down. A game is either *timed* (`selected_seconds` is
//! `Some(n)`) or *untimed* (`None`), in which case both counters sit at zero
//! and the clock never runs.
//!
//! ```text
//! select_seconds(Some(300))  -> W 05:00  B 05:00  white  running
//! tick() x5                  -> W 04:55  B 05:00
//! change_turn(None)          -> black to move, black's clock counts
//! select_seconds(None)       -> W 00:00  B 00:00  paused
//! ```
//!
//! Reaching zero never flips the turn or pauses anything by itself. The game
//! over check reads [`TurnClock::flagged`] and freezes the clock.
//!
//! # Ticking
//!
//! [`ClockTicker`] turns frame deltas into whole seconds. The tick system
//! resets it whenever the running flag or the side to move changes so a
//! partial second from one side is never charged to the other.

use std::time::Duration;

use bevy::prelude::*;

use crate::game::components::PieceColor;

/// Turn & clock controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnClock {
    white_seconds: u32,
    black_seconds: u32,
    is_white_turn: bool,
    is_running: bool,
    selected_seconds: Option<u32>,
}

impl Default for TurnClock {
    /// Untimed game, white to move
    fn default() -> Self {
        Self {
            white_seconds: 0,
            black_seconds: 0,
            is_white_turn: true,
            is_running: false,
            selected_seconds: None,
        }
    }
}

impl TurnClock {
    /// Clock for a game started with the given selection
    pub fn with_selection(selected_seconds: Option<u32>) -> Self {
        let mut clock = Self::default();
        clock.select_seconds(selected_seconds);
        clock
    }

    /// Set the side to move, or flip it when `next_is_white` is `None`
    ///
    /// Allowed while paused; undo and redo use it to restore turn ownership
    /// without ticking.
    pub fn change_turn(&mut self, next_is_white: Option<bool>) {
        self.is_white_turn = next_is_white.unwrap_or(!self.is_white_turn);
    }

    /// Pause or resume; counters are left alone
    ///
    /// An untimed clock stays paused.
    pub fn toggle_running(&mut self) {
        if self.is_timed() {
            self.is_running = !self.is_running;
        }
    }

    /// Reset both counters and give white the move
    ///
    /// Uses `seconds` if given, otherwise the current selection. The clock
    /// runs only when the reset value is positive. An untimed clock always
    /// resets to zero.
    pub fn reset_timers(&mut self, seconds: Option<u32>) {
        let s = match self.selected_seconds {
            Some(selected) => seconds.unwrap_or(selected),
            None => 0,
        };
        self.white_seconds = s;
        self.black_seconds = s;
        self.is_white_turn = true;
        self.is_running = s > 0;
    }

    /// Choose a time control, or `None` for an untimed game
    pub fn select_seconds(&mut self, selected_seconds: Option<u32>) {
        self.selected_seconds = selected_seconds;
        match selected_seconds {
            Some(s) => {
                self.white_seconds = s;
                self.black_seconds = s;
                self.is_white_turn = true;
                self.is_running = true;
            }
            None => {
                self.white_seconds = 0;
                self.black_seconds = 0;
                self.is_running = false;
            }
        }
    }

    /// One second elapses for the side to move
    ///
    /// Does nothing while paused. Returns whether a counter changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }

        let counter = if self.is_white_turn {
            &mut self.white_seconds
        } else {
            &mut self.black_seconds
        };

        if *counter == 0 {
            return false;
        }
        *counter -= 1;
        true
    }

    /// Stop the clock for good (game over)
    pub fn freeze(&mut self) {
        self.is_running = false;
    }

    /// Side that ran out of time in a timed game
    pub fn flagged(&self) -> Option<PieceColor> {
        self.selected_seconds?;
        if self.white_seconds == 0 {
            Some(PieceColor::White)
        } else if self.black_seconds == 0 {
            Some(PieceColor::Black)
        } else {
            None
        }
    }

    pub fn white_seconds(&self) -> u32 {
        self.white_seconds
    }

    pub fn black_seconds(&self) -> u32 {
        self.black_seconds
    }

    pub fn seconds_for(&self, color: PieceColor) -> u32 {
        match color {
            PieceColor::White => self.white_seconds,
            PieceColor::Black => self.black_seconds,
        }
    }

    pub fn is_white_turn(&self) -> bool {
        self.is_white_turn
    }

    pub fn side_to_move(&self) -> PieceColor {
        PieceColor::from_white_turn(self.is_white_turn)
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn selected_seconds(&self) -> Option<u32> {
        self.selected_seconds
    }

    pub fn is_timed(&self) -> bool {
        self.selected_seconds.is_some()
    }
}

/// Format seconds as `MM:SS`; hours fold into the minutes
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Converts frame time into whole-second clock ticks
#[derive(Resource, Debug)]
pub struct ClockTicker {
    timer: Timer,
    watched: Option<(bool, bool)>,
}

impl Default for ClockTicker {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl ClockTicker {
    pub fn new(interval: Duration) -> Self {
        Self {
            timer: Timer::new(interval, TimerMode::Repeating),
            watched: None,
        }
    }

    /// Start counting a fresh interval if the running flag or the side to
    /// move changed since the last call
    pub fn sync(&mut self, clock: &TurnClock) {
        let key = (clock.is_running(), clock.is_white_turn());
        if self.watched != Some(key) {
            self.watched = Some(key);
            self.timer.reset();
        }
    }

    /// Advance by `delta`, returning how many whole intervals completed
    pub fn advance(&mut self, delta: Duration) -> u32 {
        self.timer.tick(delta);
        self.timer.times_finished_this_tick()
    }
}
