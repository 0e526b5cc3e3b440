//! Movement domain: player bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::LevelEntity;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

pub const PLAYER_START: Vec3 = Vec3::new(0.0, 1.5, 0.0);
pub const PLAYER_RADIUS: f32 = 0.5;
/// Capsule segment length; total height is this plus twice the radius.
pub const PLAYER_SEGMENT_LENGTH: f32 = 1.0;

/// Spawn the player facing +Z, the direction the track grows in.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let transform = Transform::from_translation(PLAYER_START).looking_to(Vec3::Z, Vec3::Y);

    info!(
        "Spawning player at {:?}: speed={}, jump={}, wall_run={}s, wall_jump_mult={}",
        PLAYER_START,
        tuning.move_speed,
        tuning.jump_force,
        tuning.wall_run_duration,
        tuning.wall_jump_multiplier
    );

    commands.spawn((
        // Identity & Movement
        (Player, LevelEntity, MovementState::default()),
        // Rendering
        (
            Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_SEGMENT_LENGTH))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.9, 0.9),
                ..default()
            })),
            transform,
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_SEGMENT_LENGTH),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Mass(tuning.body_mass),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
