//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub wall_run_duration: f32,
    pub wall_check_distance: f32,
    /// Radius of the lateral sphere probe; roughly the character's width.
    pub wall_probe_radius: f32,
    pub ground_check_distance: f32,
    pub wall_stick_force: f32,
    /// Extra vertical acceleration applied while airborne and not wall-running.
    pub gravity: f32,
    pub wall_jump_multiplier: f32,
    pub body_mass: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            jump_force: 10.0,
            wall_run_duration: 1.5,
            wall_check_distance: 1.0,
            wall_probe_radius: 0.3,
            ground_check_distance: 1.1,
            wall_stick_force: 1.0,
            gravity: -10.0,
            wall_jump_multiplier: 1.5,
            body_mass: 1.0,
        }
    }
}

impl MovementTuning {
    /// Downward acceleration felt while airborne: the engine's gravity plus
    /// the custom gravity term.
    pub fn fall_acceleration(&self, world_gravity: Vec3) -> f32 {
        -(world_gravity.y + self.gravity)
    }

    /// Apex height of a ground jump. Uses h = v² / (2g).
    pub fn single_jump_height(&self, world_gravity: Vec3) -> f32 {
        let g = self.fall_acceleration(world_gravity);
        if g <= 0.0 {
            return f32::INFINITY;
        }
        self.jump_force * self.jump_force / (2.0 * g)
    }

    /// Jump height with a margin for imperfect timing and the collider.
    pub fn safe_reachable_height(&self, world_gravity: Vec3) -> f32 {
        self.single_jump_height(world_gravity) * 0.8
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    /// x: lateral (right positive), y: forward (forward positive)
    pub axis: Vec2,
    pub jump_just_pressed: bool,
}
