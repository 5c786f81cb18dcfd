//! Core resources for game-wide configuration

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};
use crate::game::rules::RefereeKind;

/// User settings read at startup
///
/// Every field has a default, so a settings file only needs the fields it
/// wants to change.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Time control presets offered in seconds
    pub timer_presets: Vec<u32>,

    /// Time control for the first game, `None` or `0` for untimed
    pub default_timer: Option<u32>,

    /// Length of one clock tick in milliseconds
    pub tick_interval_ms: u64,

    /// Which built-in referee validates moves
    pub referee: RefereeKind,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            timer_presets: vec![300, 600, 3600],
            default_timer: None,
            tick_interval_ms: 1000,
            referee: RefereeKind::Movement,
        }
    }
}

impl GameSettings {
    /// Check the settings are usable
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidSettings`] for an empty preset list, a zero preset
    /// or a zero tick interval.
    pub fn validate(&self) -> CoreResult<()> {
        if self.timer_presets.is_empty() {
            return Err(CoreError::InvalidSettings {
                message: "timer_presets must not be empty".to_string(),
            });
        }
        if self.timer_presets.contains(&0) {
            return Err(CoreError::InvalidSettings {
                message: "timer_presets must be positive".to_string(),
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(CoreError::InvalidSettings {
                message: "tick_interval_ms must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Starting time control with `0` read as untimed
    pub fn starting_timer(&self) -> Option<u32> {
        self.default_timer.filter(|&s| s > 0)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
