//! Time control selection from the start menu
//!
//! The start menu offers a fixed row of presets. Picking a preset selects it;
//! picking the already selected preset again deselects it, which means an
//! untimed game.

use bevy::prelude::*;

/// Selected time control preset
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TimerSelection {
    presets: Vec<u32>,
    selected: Option<usize>,
}

impl Default for TimerSelection {
    fn default() -> Self {
        Self::new(vec![300, 600, 3600])
    }
}

impl TimerSelection {
    pub fn new(presets: Vec<u32>) -> Self {
        Self {
            presets,
            selected: None,
        }
    }

    /// Select preset `index`, or deselect it if it is already selected
    ///
    /// Out-of-range indices clear the selection. Returns the resulting time
    /// control in seconds.
    pub fn toggle(&mut self, index: usize) -> Option<u32> {
        self.selected = if self.selected == Some(index) || index >= self.presets.len() {
            None
        } else {
            Some(index)
        };
        self.seconds()
    }

    /// Preselect the preset matching `seconds`, if any
    pub fn select_seconds(&mut self, seconds: Option<u32>) {
        self.selected = seconds.and_then(|s| self.presets.iter().position(|&p| p == s));
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn seconds(&self) -> Option<u32> {
        self.selected.and_then(|i| self.presets.get(i).copied())
    }

    pub fn presets(&self) -> &[u32] {
        &self.presets
    }

    /// Button label for a preset, e.g. "5 Mins"
    pub fn label(seconds: u32) -> String {
        format!("{} Mins", seconds / 60)
    }
}
