//! Track domain: tuning, the active generator and segment prefabs.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::track::{SegmentPlan, SegmentRecord, TrackGenerator};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TrackTuning {
    /// Generator position; the cursor starts here.
    pub origin: Vec3,
    pub initial_segments: u32,
    /// Lookahead: a segment is spawned while the player is closer than
    /// this to the cursor.
    pub spawn_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub max_yaw_degrees: f32,
    pub wall_run_chance: f32,
    pub wall_offset: f32,
    pub max_spawns_per_frame: u32,
    /// Despawn segments this far behind the player. None keeps them all.
    pub despawn_distance: Option<f32>,
    pub platform_size: Vec3,
    pub wall_size: Vec3,
}

impl Default for TrackTuning {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            initial_segments: 6,
            spawn_distance: 15.0,
            min_distance: 4.0,
            max_distance: 8.0,
            min_height: -1.0,
            max_height: 2.0,
            max_yaw_degrees: 15.0,
            wall_run_chance: 0.3,
            wall_offset: 2.0,
            max_spawns_per_frame: 1,
            despawn_distance: None,
            platform_size: Vec3::new(4.0, 0.5, 4.0),
            wall_size: Vec3::new(1.0, 4.0, 6.0),
        }
    }
}

/// The generator for the current run plus a log of what it produced.
#[derive(Resource)]
pub struct ActiveTrack {
    pub generator: TrackGenerator<ChaCha8Rng>,
    pub log: Vec<SegmentRecord>,
}

impl ActiveTrack {
    pub fn new(generator: TrackGenerator<ChaCha8Rng>) -> Self {
        Self {
            generator,
            log: Vec::new(),
        }
    }

    pub fn record(&mut self, plan: &SegmentPlan) {
        self.log.push(SegmentRecord::from(plan));
    }
}

/// Meshes and materials shared by every spawned segment.
#[derive(Resource, Debug, Clone)]
pub struct SegmentPrefabs {
    pub platform_mesh: Handle<Mesh>,
    pub wall_mesh: Handle<Mesh>,
    pub platform_material: Option<Handle<StandardMaterial>>,
    pub wall_material: Option<Handle<StandardMaterial>>,
    pub platform_size: Vec3,
    pub wall_size: Vec3,
}
