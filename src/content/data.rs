//! Data definitions for assets/data/gameplay.ron.
//!
//! Every field has a default, so a file only needs to list what it
//! overrides. Vectors are plain arrays to keep the RON readable.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::scoring::ScoringRules;
use crate::track::TrackTuning;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct GameplayDefaults {
    pub schema_version: u32,
    /// Fixed track seed. Omit for a fresh random track every run.
    pub seed: Option<u64>,
    pub movement: MovementDef,
    pub track: TrackDef,
    pub scoring: ScoringDef,
}

impl Default for GameplayDefaults {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            seed: None,
            movement: MovementDef::default(),
            track: TrackDef::default(),
            scoring: ScoringDef::default(),
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_force: f32,
    pub wall_run_duration: f32,
    pub wall_check_distance: f32,
    pub wall_probe_radius: f32,
    pub ground_check_distance: f32,
    pub wall_stick_force: f32,
    pub gravity: f32,
    pub wall_jump_multiplier: f32,
    pub body_mass: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        Self {
            move_speed: tuning.move_speed,
            jump_force: tuning.jump_force,
            wall_run_duration: tuning.wall_run_duration,
            wall_check_distance: tuning.wall_check_distance,
            wall_probe_radius: tuning.wall_probe_radius,
            ground_check_distance: tuning.ground_check_distance,
            wall_stick_force: tuning.wall_stick_force,
            gravity: tuning.gravity,
            wall_jump_multiplier: tuning.wall_jump_multiplier,
            body_mass: tuning.body_mass,
        }
    }
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            move_speed: def.move_speed,
            jump_force: def.jump_force,
            wall_run_duration: def.wall_run_duration,
            wall_check_distance: def.wall_check_distance,
            wall_probe_radius: def.wall_probe_radius,
            ground_check_distance: def.ground_check_distance,
            wall_stick_force: def.wall_stick_force,
            gravity: def.gravity,
            wall_jump_multiplier: def.wall_jump_multiplier,
            body_mass: def.body_mass,
        }
    }
}

// ============================================================================
// Track
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct TrackDef {
    pub origin: [f32; 3],
    pub initial_segments: u32,
    pub spawn_distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub max_yaw_degrees: f32,
    pub wall_run_chance: f32,
    pub wall_offset: f32,
    pub max_spawns_per_frame: u32,
    pub despawn_distance: Option<f32>,
    pub platform_size: [f32; 3],
    pub wall_size: [f32; 3],
}

impl Default for TrackDef {
    fn default() -> Self {
        let tuning = TrackTuning::default();
        Self {
            origin: tuning.origin.to_array(),
            initial_segments: tuning.initial_segments,
            spawn_distance: tuning.spawn_distance,
            min_distance: tuning.min_distance,
            max_distance: tuning.max_distance,
            min_height: tuning.min_height,
            max_height: tuning.max_height,
            max_yaw_degrees: tuning.max_yaw_degrees,
            wall_run_chance: tuning.wall_run_chance,
            wall_offset: tuning.wall_offset,
            max_spawns_per_frame: tuning.max_spawns_per_frame,
            despawn_distance: tuning.despawn_distance,
            platform_size: tuning.platform_size.to_array(),
            wall_size: tuning.wall_size.to_array(),
        }
    }
}

impl From<&TrackDef> for TrackTuning {
    fn from(def: &TrackDef) -> Self {
        Self {
            origin: Vec3::from_array(def.origin),
            initial_segments: def.initial_segments,
            spawn_distance: def.spawn_distance,
            min_distance: def.min_distance,
            max_distance: def.max_distance,
            min_height: def.min_height,
            max_height: def.max_height,
            max_yaw_degrees: def.max_yaw_degrees,
            wall_run_chance: def.wall_run_chance,
            wall_offset: def.wall_offset,
            max_spawns_per_frame: def.max_spawns_per_frame,
            despawn_distance: def.despawn_distance,
            platform_size: Vec3::from_array(def.platform_size),
            wall_size: Vec3::from_array(def.wall_size),
        }
    }
}

// ============================================================================
// Scoring
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ScoringDef {
    pub enabled: bool,
    pub required_score: u32,
    pub fall_y_threshold: f32,
    pub win_z_threshold: f32,
    pub restart_delay: f32,
}

impl Default for ScoringDef {
    fn default() -> Self {
        let rules = ScoringRules::default();
        Self {
            enabled: rules.enabled,
            required_score: rules.required_score,
            fall_y_threshold: rules.fall_y_threshold,
            win_z_threshold: rules.win_z_threshold,
            restart_delay: rules.restart_delay,
        }
    }
}

impl From<&ScoringDef> for ScoringRules {
    fn from(def: &ScoringDef) -> Self {
        Self {
            enabled: def.enabled,
            required_score: def.required_score,
            fall_y_threshold: def.fall_y_threshold,
            win_z_threshold: def.win_z_threshold,
            restart_delay: def.restart_delay,
        }
    }
}
