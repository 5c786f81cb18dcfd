//! Game plugin - registers game resources, messages and systems
//!
//! # Plugin Dependencies
//!
//! Needs a [`Time`] resource for the clock. `MinimalPlugins` provides one; if
//! none is present a manual `Time` is initialised, which tests advance by
//! hand.
//!
//! # System Organization
//!
//! Systems are organized into sets with explicit ordering:
//! - `Input` - Game commands
//! - `Execution` - Move attempts, then queued undo/redo
//! - `Clock` - Ticking and time expiry
//! - `Views` - Derived text views, only when the session changed
//!
//! # See Also
//!
//! - [`super::resources`] - Game resource definitions
//! - [`super::systems`] - Game system implementations
//! - [`super::system_sets`] - System set definitions

use std::time::Duration;

use bevy::prelude::*;

use super::events::{GameCommand, MoveAttempt};
use super::resources::*;
use super::rules::{BoardPieces, RefereeHandle, RefereeKind};
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::GameSettings;
use crate::ui::game_ui::{refresh_clock_view, refresh_move_list_view, ClockView, MoveListView};

/// Game plugin
///
/// Configured from [`GameSettings`]; the default matches default settings.
#[derive(Debug, Clone)]
pub struct GamePlugin {
    pub selected_seconds: Option<u32>,
    pub timer_presets: Vec<u32>,
    pub tick_interval: Duration,
    pub referee: RefereeKind,
}

impl Default for GamePlugin {
    fn default() -> Self {
        Self::from_settings(&GameSettings::default())
    }
}

impl GamePlugin {
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            selected_seconds: settings.starting_timer(),
            timer_presets: settings.timer_presets.clone(),
            tick_interval: settings.tick_interval(),
            referee: settings.referee,
        }
    }
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let mut selection = TimerSelection::new(self.timer_presets.clone());
        selection.select_seconds(self.selected_seconds);

        // Register resources
        app.insert_resource(GameSession::new(self.selected_seconds))
            .insert_resource(selection)
            .insert_resource(ClockTicker::new(self.tick_interval))
            .insert_resource(RefereeHandle(self.referee.build()))
            .init_resource::<BoardPieces>()
            .init_resource::<GameOverState>()
            .init_resource::<MoveApplier>()
            .init_resource::<MoveListView>()
            .init_resource::<ClockView>()
            .init_resource::<Time>();

        app.add_message::<MoveAttempt>()
            .add_message::<GameCommand>();

        // Input → Execution → Clock → Views
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Clock,
                GameSystems::Views,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                handle_game_commands.in_set(GameSystems::Input),
                (handle_move_attempts, apply_history_requests)
                    .chain()
                    .in_set(GameSystems::Execution),
                (tick_game_clock, check_time_expiry)
                    .chain()
                    .in_set(GameSystems::Clock),
                (refresh_move_list_view, refresh_clock_view)
                    .in_set(GameSystems::Views)
                    .run_if(resource_changed::<GameSession>),
            ),
        );
    }
}
