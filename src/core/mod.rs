//! Core module - configuration and application infrastructure
//!
//! - [`GameSettings`] - User preferences read at startup
//! - [`settings_persistence`] - JSON load/save with default fallback
//! - [`CorePlugin`] - Inserts the settings into the app
//! - [`CoreError`] - Settings errors

pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use settings_persistence::{load_or_default, load_settings, save_settings, settings_path};
