//! Core plugin
//!
//! Makes the loaded [`GameSettings`] available as a resource. Add it before
//! [`crate::game::GamePlugin`].

use bevy::prelude::*;
use tracing::info;

use super::GameSettings;

/// Core plugin carrying the startup settings
#[derive(Debug, Clone, Default)]
pub struct CorePlugin {
    pub settings: GameSettings,
}

impl CorePlugin {
    pub fn new(settings: GameSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        info!(
            "[SETTINGS] presets {:?}, default timer {:?}, tick {} ms, referee {:?}",
            self.settings.timer_presets,
            self.settings.starting_timer(),
            self.settings.tick_interval_ms,
            self.settings.referee
        );
        app.insert_resource(self.settings.clone());
    }
}
