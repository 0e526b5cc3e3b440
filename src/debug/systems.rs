//! Debug domain: hotkeys, overlay refresh and probe gizmos.

use avian3d::prelude::LinearVelocity;
use bevy::prelude::*;

use crate::core::{GameState, RunConfig};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::movement::{MovementState, MovementTuning, Player};
use crate::scoring::RunScore;
use crate::track::{ActiveTrack, SegmentRecord};

const STATUS_MESSAGE_SECS: f32 = 3.0;

/// Render the segment log as pretty JSON for seed regression checks.
pub fn segment_log_json(log: &[SegmentRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(log)
}

/// F3 overlay, F4 probes, F5 restart, F6 dump segment log, F7 pin seed
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut run_config: ResMut<RunConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    track: Option<Res<ActiveTrack>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_probes = !debug_state.show_probes;
        let msg = if debug_state.show_probes {
            "Probe gizmos ON"
        } else {
            "Probe gizmos OFF"
        };
        debug_state.set_message(msg, STATUS_MESSAGE_SECS);
    }

    if keyboard.just_pressed(KeyCode::F5) {
        info!("Debug: restarting run");
        next_state.set(GameState::Reloading);
    }

    if keyboard.just_pressed(KeyCode::F6) {
        dump_segment_log(track.as_deref(), run_config.seed, &mut debug_state);
    }

    if keyboard.just_pressed(KeyCode::F7) {
        run_config.fixed_seed = match run_config.fixed_seed {
            Some(_) => None,
            None => Some(run_config.seed),
        };
        let msg = match run_config.fixed_seed {
            Some(seed) => format!("Seed pinned: {}", seed),
            None => "Seed unpinned".to_string(),
        };
        info!("Debug: {}", msg);
        debug_state.set_message(msg, STATUS_MESSAGE_SECS);
    }
}

fn dump_segment_log(track: Option<&ActiveTrack>, seed: u64, debug_state: &mut DebugState) {
    let Some(track) = track else {
        debug_state.set_message("No active track", STATUS_MESSAGE_SECS);
        return;
    };

    match segment_log_json(&track.log) {
        Ok(json) => {
            info!("Segment log (seed {}):\n{}", seed, json);
            debug_state.set_message(
                format!("Dumped {} segments", track.log.len()),
                STATUS_MESSAGE_SECS,
            );
        }
        Err(e) => warn!("Failed to serialize segment log: {}", e),
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Keep the overlay in sync with `show_info` and refresh its text
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    game_state: Res<State<GameState>>,
    score: Res<RunScore>,
    track: Option<Res<ActiveTrack>>,
    player_query: Query<(&Transform, &MovementState, &LinearVelocity), With<Player>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    let Ok((_, mut text)) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    let segments = track.map_or(0, |t| t.generator.spawned_count());
    let mut info = format!(
        "State: {:?}\nSeed: {} (run {})\nScore: {}\nSegments: {}",
        game_state.get(),
        run_config.seed,
        run_config.run_index,
        score.current,
        segments
    );

    if let Ok((transform, movement, velocity)) = player_query.single() {
        let pos = transform.translation;
        info.push_str(&format!(
            "\nPos: ({:.1}, {:.1}, {:.1})\nVel: ({:.1}, {:.1}, {:.1})\nMode: {:?}\nWall timer: {:.2}",
            pos.x,
            pos.y,
            pos.z,
            velocity.x,
            velocity.y,
            velocity.z,
            movement.mode(),
            movement.wall_run_timer
        ));
    }

    if let Some((message, _)) = &debug_state.status_message {
        info.push_str(&format!("\n> {}", message));
    }

    **text = info;
}

/// Draw the ground ray and both lateral wall probes
pub(crate) fn draw_movement_probes(
    mut gizmos: Gizmos,
    debug_state: Res<DebugState>,
    tuning: Res<MovementTuning>,
    player_query: Query<(&Transform, &MovementState), With<Player>>,
) {
    if !debug_state.show_probes {
        return;
    }

    let Ok((transform, movement)) = player_query.single() else {
        return;
    };

    let hit = Color::srgb(0.2, 0.9, 0.3);
    let miss = Color::srgb(0.9, 0.25, 0.2);
    let origin = transform.translation;

    let ground_color = if movement.is_grounded { hit } else { miss };
    gizmos.line(
        origin,
        origin + Vec3::NEG_Y * tuning.ground_check_distance,
        ground_color,
    );

    let wall_color = if movement.is_near_wall { hit } else { miss };
    let right = *transform.right();
    for side in [-right, right] {
        let end = origin + side * tuning.wall_check_distance;
        gizmos.line(origin, end, wall_color);
        gizmos.sphere(
            Isometry3d::from_translation(end),
            tuning.wall_probe_radius,
            wall_color,
        );
    }

    if movement.is_wall_running {
        gizmos.arrow(
            origin,
            origin + movement.wall_normal,
            Color::srgb(0.3, 0.6, 1.0),
        );
    }
}
