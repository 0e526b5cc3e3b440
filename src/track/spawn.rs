//! Track domain: turning segment plans into world entities.

use avian3d::prelude::*;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::{LevelEntity, RunConfig};
use crate::movement::{GameLayer, Ground, Player, Wall};
use crate::track::{
    ActiveTrack, Segment, SegmentKind, SegmentPlan, SegmentPrefabs, StartPad, TrackGenerator,
    TrackTuning,
};

/// Build the shared meshes once, sized from the loaded tuning.
pub(crate) fn setup_segment_prefabs(
    mut commands: Commands,
    tuning: Res<TrackTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let platform_size = tuning.platform_size;
    let wall_size = tuning.wall_size;

    commands.insert_resource(SegmentPrefabs {
        platform_mesh: meshes.add(Cuboid::from_size(platform_size)),
        wall_mesh: meshes.add(Cuboid::from_size(wall_size)),
        platform_material: Some(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.4, 0.45),
            perceptual_roughness: 0.9,
            ..default()
        })),
        wall_material: Some(materials.add(StandardMaterial {
            base_color: Color::srgb(0.85, 0.45, 0.2),
            perceptual_roughness: 0.7,
            ..default()
        })),
        platform_size,
        wall_size,
    });
}

/// Spawn one planned segment. A missing material only skips rendering;
/// the collider is always created.
pub(crate) fn spawn_segment(
    commands: &mut Commands,
    prefabs: &SegmentPrefabs,
    plan: &SegmentPlan,
) -> Entity {
    let (mesh, material, size, layer) = match plan.kind {
        SegmentKind::Platform => (
            &prefabs.platform_mesh,
            &prefabs.platform_material,
            prefabs.platform_size,
            GameLayer::Ground,
        ),
        SegmentKind::WallRun(_) => (
            &prefabs.wall_mesh,
            &prefabs.wall_material,
            prefabs.wall_size,
            GameLayer::Wall,
        ),
    };

    let mut entity = commands.spawn((
        Name::new(format!("Segment {}", plan.index)),
        Segment {
            index: plan.index,
            kind: plan.kind,
        },
        LevelEntity,
        Mesh3d(mesh.clone()),
        Transform::from_translation(plan.position).with_rotation(plan.rotation),
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionLayers::new(layer, [GameLayer::Player]),
    ));

    match plan.kind {
        SegmentKind::Platform => entity.insert(Ground),
        SegmentKind::WallRun(_) => entity.insert(Wall),
    };

    if let Some(material) = material {
        entity.insert(MeshMaterial3d(material.clone()));
    }

    entity.id()
}

/// Seed a fresh generator for the run and lay down the opening stretch.
pub(crate) fn setup_track(
    mut commands: Commands,
    tuning: Res<TrackTuning>,
    run_config: Res<RunConfig>,
    prefabs: Res<SegmentPrefabs>,
) {
    let size = prefabs.platform_size;
    let mut start_pad = commands.spawn((
        Name::new("Start Pad"),
        StartPad,
        Ground,
        LevelEntity,
        Mesh3d(prefabs.platform_mesh.clone()),
        Transform::from_translation(tuning.origin),
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
    if let Some(material) = &prefabs.platform_material {
        start_pad.insert(MeshMaterial3d(material.clone()));
    }

    let rng = ChaCha8Rng::seed_from_u64(run_config.seed);
    let mut generator = TrackGenerator::new(tuning.origin, tuning.clone(), rng);
    let plans = generator.seed_initial();

    let mut track = ActiveTrack::new(generator);
    for plan in &plans {
        spawn_segment(&mut commands, &prefabs, plan);
        track.record(plan);
    }

    info!(
        "Track seeded: seed={}, segments={}, cursor={:?}",
        run_config.seed,
        plans.len(),
        track.generator.cursor().last_spawn_position
    );

    commands.insert_resource(track);
}

pub(crate) fn extend_track(
    mut commands: Commands,
    track: Option<ResMut<ActiveTrack>>,
    prefabs: Res<SegmentPrefabs>,
    player_query: Query<&Transform, With<Player>>,
) {
    let Some(mut track) = track else {
        return;
    };
    let Ok(player) = player_query.single() else {
        return;
    };

    let plans = track.generator.update(player.translation.z);
    for plan in &plans {
        spawn_segment(&mut commands, &prefabs, plan);
        track.record(plan);
        debug!(
            "Spawned segment {} ({:?}) at {:?}",
            plan.index, plan.kind, plan.position
        );
    }
}

/// Remove segments far behind the player, when eviction is configured.
pub(crate) fn evict_passed_segments(
    mut commands: Commands,
    tuning: Res<TrackTuning>,
    player_query: Query<&Transform, With<Player>>,
    segments: Query<(Entity, &Transform), With<Segment>>,
) {
    let Some(despawn_distance) = tuning.despawn_distance else {
        return;
    };
    let Ok(player) = player_query.single() else {
        return;
    };

    let cutoff = player.translation.z - despawn_distance;
    for (entity, transform) in &segments {
        if transform.translation.z < cutoff {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn clear_track(mut commands: Commands) {
    commands.remove_resource::<ActiveTrack>();
}
