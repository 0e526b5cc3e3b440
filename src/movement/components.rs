//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (start pad, platforms)
    Ground,
    /// Wall-run surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Per-player locomotion record. Grounded/airborne are derived from the
/// probes; wall-running is the only explicitly entered mode.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MovementState {
    pub is_grounded: bool,
    pub is_near_wall: bool,
    /// Normal of the last wall hit. Kept across frames without contact.
    pub wall_normal: Vec3,
    pub is_wall_running: bool,
    pub wall_run_timer: f32,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            is_grounded: false,
            is_near_wall: false,
            wall_normal: Vec3::ZERO,
            is_wall_running: false,
            wall_run_timer: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementMode {
    Grounded,
    Airborne,
    WallRunning,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall-run colliders
#[derive(Component, Debug)]
pub struct Wall;
