//! Developer tools for fast iteration: state overlay, probe gizmos and
//! track dumps. Only built with the `dev-tools` feature.
//!
//! Hotkeys:
//! - F3: toggle the info overlay
//! - F4: toggle ground/wall probe gizmos
//! - F5: restart the run
//! - F6: log the spawned segment log as JSON
//! - F7: pin or unpin the current seed

mod state;
mod systems;
mod ui;


pub use state::DebugState;
pub use systems::segment_log_json;

use bevy::prelude::*;

use crate::debug::systems::{
    draw_movement_probes, handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_status_message,
                    update_debug_info_overlay,
                )
                    .chain(),
            )
            .add_systems(Update, draw_movement_probes);
    }
}
