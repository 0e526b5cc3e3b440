//! Core domain: run lifecycle systems and camera.

use bevy::prelude::*;

use crate::core::resources::{GAME_OVER_PAUSE, GameplayPaused, RestartSchedule, RunConfig};
use crate::core::state::GameState;
use crate::core::{LevelEntity, MainCamera};
use crate::movement::Player;

/// Offset of the chase camera from the player, and its look-ahead target.
const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, 4.0, -9.0);
const CAMERA_LOOK_AHEAD: Vec3 = Vec3::new(0.0, 1.0, 6.0);
const CAMERA_FOLLOW_RATE: f32 = 6.0;

pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

/// Initialize a new run: pick the seed and clear anything the last run left.
pub fn initialize_run(
    mut run_config: ResMut<RunConfig>,
    mut paused: ResMut<GameplayPaused>,
    mut restart: ResMut<RestartSchedule>,
) {
    let seed = run_config.begin_run();
    paused.unpause(GAME_OVER_PAUSE);
    restart.cancel();

    info!(
        "Starting run {} with seed: {}{}",
        run_config.run_index,
        seed,
        if run_config.fixed_seed.is_some() {
            " (fixed)"
        } else {
            ""
        }
    );
}

/// Despawn everything the run created and drop any pending restart.
pub(crate) fn teardown_level(
    mut commands: Commands,
    level_entities: Query<Entity, With<LevelEntity>>,
    mut restart: ResMut<RestartSchedule>,
) {
    if restart.is_pending() {
        info!("Cancelling pending restart");
    }
    restart.cancel();

    let mut count = 0;
    for entity in &level_entities {
        commands.entity(entity).despawn();
        count += 1;
    }

    info!("Level torn down: {} entities despawned", count);
}

pub(crate) fn tick_restart(
    time: Res<Time>,
    mut restart: ResMut<RestartSchedule>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if restart.tick(time.delta()) {
        info!("Restart timer fired, reloading level");
        game_state.set(GameState::Reloading);
    }
}

pub(crate) fn finish_reload(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Run);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        MainCamera,
        Camera3d::default(),
        Transform::from_translation(CAMERA_OFFSET).looking_at(CAMERA_LOOK_AHEAD, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 12.0, -6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub(crate) fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let target = player.translation + CAMERA_OFFSET;
    let blend = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    camera.translation = camera.translation.lerp(target, blend);
    camera.look_at(player.translation + CAMERA_LOOK_AHEAD, Vec3::Y);
}
