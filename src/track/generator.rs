//! Track domain: forward procedural segment generation.
//!
//! The generator only decides *what* goes *where*. It returns
//! [`SegmentPlan`]s and never touches the world; `spawn.rs` turns plans
//! into entities.

use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

use crate::track::TrackTuning;

/// Right-hand side of a runner facing the track's forward axis (+Z).
pub const TRACK_RIGHT: Vec3 = Vec3::NEG_X;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Unit vector pointing from the path toward this side.
    pub fn lateral(self) -> Vec3 {
        match self {
            WallSide::Left => -TRACK_RIGHT,
            WallSide::Right => TRACK_RIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    Platform,
    WallRun(WallSide),
}

/// The forward-most spawn position; the next segment is placed relative
/// to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnCursor {
    pub last_spawn_position: Vec3,
}

/// One spawn decision.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentPlan {
    pub index: u32,
    pub kind: SegmentKind,
    /// Where the entity goes, including any lateral wall offset.
    pub position: Vec3,
    pub rotation: Quat,
    /// Cursor after this spawn (never includes the wall offset).
    pub cursor: Vec3,
    pub distance: f32,
    pub height_offset: f32,
    pub yaw_degrees: f32,
}

/// Serializable summary of a plan, kept for seed regression dumps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRecord {
    pub index: u32,
    pub kind: SegmentKind,
    pub position: [f32; 3],
    pub yaw_degrees: f32,
}

impl From<&SegmentPlan> for SegmentRecord {
    fn from(plan: &SegmentPlan) -> Self {
        Self {
            index: plan.index,
            kind: plan.kind,
            position: plan.position.to_array(),
            yaw_degrees: plan.yaw_degrees,
        }
    }
}

pub struct TrackGenerator<R: Rng> {
    cursor: SpawnCursor,
    tuning: TrackTuning,
    rng: R,
    spawned: u32,
}

impl<R: Rng> TrackGenerator<R> {
    pub fn new(origin: Vec3, tuning: TrackTuning, rng: R) -> Self {
        Self {
            cursor: SpawnCursor {
                last_spawn_position: origin,
            },
            tuning,
            rng,
            spawned: 0,
        }
    }

    pub fn cursor(&self) -> SpawnCursor {
        self.cursor
    }

    pub fn spawned_count(&self) -> u32 {
        self.spawned
    }

    /// The initial batch, laid out from the origin.
    pub fn seed_initial(&mut self) -> Vec<SegmentPlan> {
        (0..self.tuning.initial_segments)
            .map(|_| self.next_segment())
            .collect()
    }

    /// True when the player is within `spawn_distance` of the cursor.
    pub fn needs_segment(&self, player_z: f32) -> bool {
        player_z + self.tuning.spawn_distance > self.cursor.last_spawn_position.z
    }

    /// Per-frame proximity check. Spawns at most `max_spawns_per_frame`
    /// segments, so a fast enough player can outrun the track.
    pub fn update(&mut self, player_z: f32) -> Vec<SegmentPlan> {
        let budget = self.tuning.max_spawns_per_frame as usize;
        let mut plans = Vec::new();

        while plans.len() < budget && self.needs_segment(player_z) {
            plans.push(self.next_segment());
        }

        plans
    }

    /// Draw one segment and advance the cursor.
    ///
    /// Draw order is fixed (distance, height, yaw, wall chance, side) so
    /// a seed always reproduces the same track.
    pub fn next_segment(&mut self) -> SegmentPlan {
        let tuning = &self.tuning;

        let distance = self
            .rng
            .random_range(tuning.min_distance..=tuning.max_distance);
        let height_offset = self.rng.random_range(tuning.min_height..=tuning.max_height);
        let yaw_degrees = self
            .rng
            .random_range(-tuning.max_yaw_degrees..=tuning.max_yaw_degrees);
        let spawn_wall_run = self.rng.random::<f32>() < tuning.wall_run_chance;

        let candidate =
            self.cursor.last_spawn_position + Vec3::new(0.0, height_offset, distance);

        let (kind, position, rotation) = if spawn_wall_run {
            let side = if self.rng.random::<f32>() < 0.5 {
                WallSide::Left
            } else {
                WallSide::Right
            };
            (
                SegmentKind::WallRun(side),
                candidate + side.lateral() * tuning.wall_offset,
                Quat::IDENTITY,
            )
        } else {
            (
                SegmentKind::Platform,
                candidate,
                Quat::from_rotation_y(yaw_degrees.to_radians()),
            )
        };

        self.cursor.last_spawn_position = candidate;
        let index = self.spawned;
        self.spawned += 1;

        SegmentPlan {
            index,
            kind,
            position,
            rotation,
            cursor: candidate,
            distance,
            height_offset,
            yaw_degrees,
        }
    }
}
