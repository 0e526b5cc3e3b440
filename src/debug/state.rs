//! Debug domain: state for the developer overlay and hotkeys.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the info overlay (mode, timer, velocity, score) is visible
    pub show_info: bool,
    /// Whether ground and wall probes are drawn with gizmos
    pub show_probes: bool,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Count down the status message. Clears it once expired.
    pub fn tick_message(&mut self, delta_secs: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= delta_secs;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}
