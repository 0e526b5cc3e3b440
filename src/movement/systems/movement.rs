//! Movement domain: frame and fixed-step locomotion systems.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::systems::collisions::SpatialProbe;
use crate::movement::{
    ForceMode, JumpEvent, MotionBody, MovementInput, MovementState, MovementTuning, Player,
};
use crate::scoring::RunEndedEvent;

type PlayerBodyQuery = (
    &'static Transform,
    &'static mut LinearVelocity,
    &'static mut GravityScale,
    &'static mut RigidBody,
    &'static mut MovementState,
);

/// [`MotionBody`] over the player's Avian components.
///
/// Forces are integrated straight into the linear velocity over `dt`,
/// the same way manual gravity is applied.
pub(crate) struct PlayerBody<'a> {
    transform: &'a Transform,
    velocity: Mut<'a, LinearVelocity>,
    gravity_scale: Mut<'a, GravityScale>,
    rigid_body: Mut<'a, RigidBody>,
    inverse_mass: f32,
    dt: f32,
}

impl<'a> PlayerBody<'a> {
    fn new(
        transform: &'a Transform,
        velocity: Mut<'a, LinearVelocity>,
        gravity_scale: Mut<'a, GravityScale>,
        rigid_body: Mut<'a, RigidBody>,
        tuning: &MovementTuning,
        dt: f32,
    ) -> Self {
        Self {
            transform,
            velocity,
            gravity_scale,
            rigid_body,
            inverse_mass: tuning.body_mass.recip(),
            dt,
        }
    }
}

impl MotionBody for PlayerBody<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn right(&self) -> Dir3 {
        self.transform.right()
    }

    fn forward(&self) -> Dir3 {
        self.transform.forward()
    }

    fn velocity(&self) -> Vec3 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity.0 = velocity;
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity_scale.0 > 0.0
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        let scale = if enabled { 1.0 } else { 0.0 };
        // Avoid tripping change detection every frame
        if self.gravity_scale.0 != scale {
            self.gravity_scale.0 = scale;
        }
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        let acceleration = match mode {
            ForceMode::Force => force * self.inverse_mass,
            ForceMode::Acceleration => force,
        };
        self.velocity.0 += acceleration * self.dt;
    }

    fn freeze(&mut self) {
        self.velocity.0 = Vec3::ZERO;
        *self.rigid_body = RigidBody::Kinematic;
    }
}

pub(crate) fn update_movement(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut jump_events: MessageWriter<JumpEvent>,
    mut query: Query<PlayerBodyQuery, With<Player>>,
) {
    let dt = time.delta_secs();
    let probe = SpatialProbe::new(&spatial_query);

    for (transform, velocity, gravity_scale, rigid_body, mut state) in &mut query {
        let mut body = PlayerBody::new(transform, velocity, gravity_scale, rigid_body, &tuning, dt);

        if let Some(kind) = state.frame_update(&mut body, &probe, &*input, &tuning, dt) {
            jump_events.write(JumpEvent { kind });
        }
    }
}

pub(crate) fn apply_fixed_movement(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<PlayerBodyQuery, With<Player>>,
) {
    let dt = time.delta_secs();
    let probe = SpatialProbe::new(&spatial_query);

    for (transform, velocity, gravity_scale, rigid_body, mut state) in &mut query {
        let mut body = PlayerBody::new(transform, velocity, gravity_scale, rigid_body, &tuning, dt);
        state.fixed_update(&mut body, &probe, &*input, &tuning);
    }
}

pub(crate) fn freeze_player_on_run_end(
    mut run_ended: MessageReader<RunEndedEvent>,
    tuning: Res<MovementTuning>,
    mut query: Query<PlayerBodyQuery, With<Player>>,
) {
    let Some(event) = run_ended.read().last() else {
        return;
    };

    for (transform, velocity, gravity_scale, rigid_body, mut state) in &mut query {
        let mut body = PlayerBody::new(transform, velocity, gravity_scale, rigid_body, &tuning, 0.0);
        state.freeze(&mut body);
        info!(
            "Player frozen at {:?} ({:?})",
            transform.translation, event.outcome
        );
    }
}
