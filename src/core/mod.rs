//! Core domain: run flow plugin wiring and public exports.

mod resources;
mod state;
mod systems;


pub use resources::{
    GAME_OVER_PAUSE, GameplayPaused, RestartSchedule, RunConfig, gameplay_active,
};
pub use state::GameState;
pub use systems::initialize_run;

use bevy::prelude::*;

use crate::core::systems::{
    finish_reload, follow_player, setup_camera, teardown_level, tick_restart, transition_to_run,
};

/// Marker for every entity that belongs to the current run.
/// Despawned wholesale when the level reloads.
#[derive(Component, Debug)]
pub struct LevelEntity;

#[derive(Component, Debug)]
pub struct MainCamera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<GameplayPaused>()
            .init_resource::<RestartSchedule>()
            .add_systems(Startup, (setup_camera, transition_to_run))
            .add_systems(OnEnter(GameState::Run), initialize_run)
            .add_systems(OnExit(GameState::Run), teardown_level)
            .add_systems(OnEnter(GameState::Reloading), finish_reload)
            .add_systems(
                Update,
                (tick_restart, follow_player).run_if(in_state(GameState::Run)),
            );
    }
}
