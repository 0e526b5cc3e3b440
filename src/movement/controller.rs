//! Movement domain: the wall-run state machine.
//!
//! Everything here talks to the outside world through three small traits:
//! [`PhysicsQuery`] for probes, [`MotionBody`] for the rigid body and
//! [`InputSource`] for the sampled controls. The Bevy systems in
//! `systems/` provide the real implementations; tests provide fakes.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementMode, MovementState, MovementTuning};

/// Surface classification a probe is filtered against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Ground,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub normal: Vec3,
}

pub trait PhysicsQuery {
    fn cast_ray(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        surface: SurfaceKind,
    ) -> Option<SurfaceHit>;

    fn cast_sphere(
        &self,
        origin: Vec3,
        radius: f32,
        direction: Dir3,
        max_distance: f32,
        surface: SurfaceKind,
    ) -> Option<SurfaceHit>;
}

pub trait InputSource {
    /// Lateral (x) and forward (y) axes, each in [-1, 1].
    fn move_axis(&self) -> Vec2;
    /// Edge-triggered: true only on the frame jump went down.
    fn jump_pressed(&self) -> bool;
}

impl InputSource for MovementInput {
    fn move_axis(&self) -> Vec2 {
        self.axis
    }

    fn jump_pressed(&self) -> bool {
        self.jump_just_pressed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceMode {
    /// Scaled by the body's inverse mass.
    Force,
    /// Mass-independent.
    Acceleration,
}

pub trait MotionBody {
    fn position(&self) -> Vec3;
    fn right(&self) -> Dir3;
    fn forward(&self) -> Dir3;
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    fn gravity_enabled(&self) -> bool;
    fn set_gravity_enabled(&mut self, enabled: bool);
    /// Continuous force for the current physics step.
    fn add_force(&mut self, force: Vec3, mode: ForceMode);
    /// Stop the body in place and take it out of the simulation.
    fn freeze(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
}

impl MovementState {
    pub fn mode(&self) -> MovementMode {
        if self.is_wall_running {
            MovementMode::WallRunning
        } else if self.is_grounded {
            MovementMode::Grounded
        } else {
            MovementMode::Airborne
        }
    }

    /// Refresh ground and wall contact. Probes have no side effects, so
    /// this is safe to run any number of times per frame.
    pub fn sense(
        &mut self,
        body: &impl MotionBody,
        physics: &impl PhysicsQuery,
        tuning: &MovementTuning,
    ) {
        let origin = body.position();

        self.is_grounded = physics
            .cast_ray(
                origin,
                Dir3::NEG_Y,
                tuning.ground_check_distance,
                SurfaceKind::Ground,
            )
            .is_some();

        // Left first; the right side is only probed when the left misses.
        let right = body.right();
        let wall_hit = physics
            .cast_sphere(
                origin,
                tuning.wall_probe_radius,
                -right,
                tuning.wall_check_distance,
                SurfaceKind::Wall,
            )
            .or_else(|| {
                physics.cast_sphere(
                    origin,
                    tuning.wall_probe_radius,
                    right,
                    tuning.wall_check_distance,
                    SurfaceKind::Wall,
                )
            });

        self.is_near_wall = wall_hit.is_some();
        if let Some(hit) = wall_hit {
            self.wall_normal = hit.normal;
        }
    }

    /// Variable-step update: probes, mode transitions, timers, jumps and
    /// ground/air movement. Returns the jump performed this frame, if any.
    pub fn frame_update(
        &mut self,
        body: &mut impl MotionBody,
        physics: &impl PhysicsQuery,
        input: &impl InputSource,
        tuning: &MovementTuning,
        dt: f32,
    ) -> Option<JumpKind> {
        self.sense(body, physics, tuning);

        if self.is_near_wall && !self.is_grounded {
            self.start_wall_run(body, tuning);
        } else {
            self.stop_wall_run(body);
        }

        if self.is_wall_running {
            self.wall_run_timer -= dt;
            if self.wall_run_timer <= 0.0 || !self.is_near_wall {
                self.stop_wall_run(body);
                return None;
            }

            if input.jump_pressed() {
                self.jump_off_wall(body, tuning);
                return Some(JumpKind::Wall);
            }

            return None;
        }

        self.apply_planar_input(body, input, tuning);

        if self.is_grounded && input.jump_pressed() {
            let mut velocity = body.velocity();
            velocity.y = tuning.jump_force;
            body.set_velocity(velocity);
            debug!("Ground jump: vy={}", velocity.y);
            return Some(JumpKind::Ground);
        }

        None
    }

    /// Fixed-step update: continuous forces. Wall-run is never entered here,
    /// only left when its preconditions stop holding.
    pub fn fixed_update(
        &mut self,
        body: &mut impl MotionBody,
        physics: &impl PhysicsQuery,
        input: &impl InputSource,
        tuning: &MovementTuning,
    ) {
        self.sense(body, physics, tuning);

        if self.is_wall_running && (self.is_grounded || !self.is_near_wall) {
            self.stop_wall_run(body);
        }

        if self.is_wall_running {
            // Counteracts the solver pushing the body off the wall
            body.add_force(-self.wall_normal * tuning.wall_stick_force, ForceMode::Force);
            self.apply_planar_input(body, input, tuning);
        } else if !self.is_grounded {
            body.add_force(Vec3::Y * tuning.gravity, ForceMode::Acceleration);
        }
    }

    /// No-op while already wall-running: re-entry never resets the timer.
    pub fn start_wall_run(&mut self, body: &mut impl MotionBody, tuning: &MovementTuning) {
        if self.is_wall_running {
            return;
        }

        self.is_wall_running = true;
        self.wall_run_timer = tuning.wall_run_duration;
        body.set_gravity_enabled(false);
        debug!("Wall run started: normal={:?}", self.wall_normal);
    }

    pub fn stop_wall_run(&mut self, body: &mut impl MotionBody) {
        if self.is_wall_running {
            debug!(
                "Wall run ended: timer={:.3}, grounded={}, near_wall={}",
                self.wall_run_timer, self.is_grounded, self.is_near_wall
            );
        }

        self.is_wall_running = false;
        body.set_gravity_enabled(true);
    }

    pub fn jump_off_wall(&mut self, body: &mut impl MotionBody, tuning: &MovementTuning) {
        self.stop_wall_run(body);

        let direction = (self.wall_normal + Vec3::Y).normalize_or_zero();
        let velocity = direction * tuning.jump_force * tuning.wall_jump_multiplier;
        body.set_velocity(velocity);
        debug!("Wall jump: velocity={:?}", velocity);
    }

    /// Horizontal velocity straight from input, vertical velocity untouched.
    pub fn apply_planar_input(
        &self,
        body: &mut impl MotionBody,
        input: &impl InputSource,
        tuning: &MovementTuning,
    ) {
        let axis = input.move_axis().clamp_length_max(1.0);
        let direction = body.right() * axis.x + body.forward() * axis.y;
        let current = body.velocity();

        body.set_velocity(Vec3::new(
            direction.x * tuning.move_speed,
            current.y,
            direction.z * tuning.move_speed,
        ));
    }

    pub fn freeze(&mut self, body: &mut impl MotionBody) {
        self.stop_wall_run(body);
        body.freeze();
    }
}
