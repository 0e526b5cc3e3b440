//! Movement domain: unit tests for the wall-run state machine.

use bevy::prelude::*;
use std::cell::Cell;

use super::{
    ForceMode, InputSource, JumpKind, MotionBody, MovementMode, MovementState, MovementTuning,
    PhysicsQuery, SurfaceHit, SurfaceKind,
};

const DT: f32 = 1.0 / 60.0;

// -----------------------------------------------------------------------------
// Fakes
// -----------------------------------------------------------------------------

struct FakeBody {
    position: Vec3,
    velocity: Vec3,
    gravity: bool,
    forces: Vec<(Vec3, ForceMode)>,
    frozen: bool,
}

impl Default for FakeBody {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 2.0, 0.0),
            velocity: Vec3::ZERO,
            gravity: true,
            forces: Vec::new(),
            frozen: false,
        }
    }
}

impl MotionBody for FakeBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn right(&self) -> Dir3 {
        Dir3::X
    }

    fn forward(&self) -> Dir3 {
        Dir3::Z
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity = enabled;
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        self.forces.push((force, mode));
    }

    fn freeze(&mut self) {
        self.velocity = Vec3::ZERO;
        self.frozen = true;
    }
}

#[derive(Default)]
struct FakeWorld {
    ground: bool,
    left_wall: Option<Vec3>,
    right_wall: Option<Vec3>,
    sphere_casts: Cell<u32>,
    last_ray_distance: Cell<f32>,
}

impl FakeWorld {
    fn airborne_by_left_wall() -> Self {
        Self {
            left_wall: Some(Vec3::X),
            ..default()
        }
    }
}

impl PhysicsQuery for FakeWorld {
    fn cast_ray(
        &self,
        _origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        surface: SurfaceKind,
    ) -> Option<SurfaceHit> {
        assert_eq!(direction, Dir3::NEG_Y);
        assert_eq!(surface, SurfaceKind::Ground);
        self.last_ray_distance.set(max_distance);

        self.ground.then_some(SurfaceHit { normal: Vec3::Y })
    }

    fn cast_sphere(
        &self,
        _origin: Vec3,
        _radius: f32,
        direction: Dir3,
        _max_distance: f32,
        surface: SurfaceKind,
    ) -> Option<SurfaceHit> {
        assert_eq!(surface, SurfaceKind::Wall);
        self.sphere_casts.set(self.sphere_casts.get() + 1);

        let normal = if direction == Dir3::NEG_X {
            self.left_wall
        } else if direction == Dir3::X {
            self.right_wall
        } else {
            None
        };

        normal.map(|normal| SurfaceHit { normal })
    }
}

#[derive(Default)]
struct FakeInput {
    axis: Vec2,
    jump: bool,
}

impl InputSource for FakeInput {
    fn move_axis(&self) -> Vec2 {
        self.axis
    }

    fn jump_pressed(&self) -> bool {
        self.jump
    }
}

fn assert_gravity_invariant(state: &MovementState, body: &FakeBody) {
    assert_eq!(
        state.is_wall_running, !body.gravity,
        "gravity must be off exactly while wall-running"
    );
}

// -----------------------------------------------------------------------------
// Sensing
// -----------------------------------------------------------------------------

#[test]
fn test_default_state_is_airborne() {
    let state = MovementState::default();
    assert_eq!(state.mode(), MovementMode::Airborne);
    assert!(!state.is_wall_running);
}

#[test]
fn test_ground_probe_uses_check_distance() {
    let tuning = MovementTuning::default();
    let world = FakeWorld {
        ground: true,
        ..default()
    };
    let body = FakeBody::default();
    let mut state = MovementState::default();

    state.sense(&body, &world, &tuning);

    assert!(state.is_grounded);
    assert_eq!(world.last_ray_distance.get(), tuning.ground_check_distance);
    assert_eq!(state.mode(), MovementMode::Grounded);
}

#[test]
fn test_wall_probe_prefers_left_hit() {
    let tuning = MovementTuning::default();
    let world = FakeWorld {
        left_wall: Some(Vec3::X),
        right_wall: Some(Vec3::NEG_X),
        ..default()
    };
    let body = FakeBody::default();
    let mut state = MovementState::default();

    state.sense(&body, &world, &tuning);

    assert!(state.is_near_wall);
    assert_eq!(state.wall_normal, Vec3::X);
    // Right side is never probed when the left hits
    assert_eq!(world.sphere_casts.get(), 1);
}

#[test]
fn test_wall_probe_falls_back_to_right() {
    let tuning = MovementTuning::default();
    let world = FakeWorld {
        right_wall: Some(Vec3::NEG_X),
        ..default()
    };
    let body = FakeBody::default();
    let mut state = MovementState::default();

    state.sense(&body, &world, &tuning);

    assert!(state.is_near_wall);
    assert_eq!(state.wall_normal, Vec3::NEG_X);
    assert_eq!(world.sphere_casts.get(), 2);
}

#[test]
fn test_wall_normal_kept_after_contact_lost() {
    let tuning = MovementTuning::default();
    let body = FakeBody::default();
    let mut state = MovementState::default();

    state.sense(&body, &FakeWorld::airborne_by_left_wall(), &tuning);
    state.sense(&body, &FakeWorld::default(), &tuning);

    assert!(!state.is_near_wall);
    assert_eq!(state.wall_normal, Vec3::X);
}

// -----------------------------------------------------------------------------
// Wall-run transitions
// -----------------------------------------------------------------------------

#[test]
fn test_enters_wall_run_when_airborne_near_wall() {
    let tuning = MovementTuning::default();
    let world = FakeWorld::airborne_by_left_wall();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    let jump = state.frame_update(&mut body, &world, &FakeInput::default(), &tuning, DT);

    assert!(jump.is_none());
    assert_eq!(state.mode(), MovementMode::WallRunning);
    assert!((state.wall_run_timer - (tuning.wall_run_duration - DT)).abs() < 1e-6);
    assert_gravity_invariant(&state, &body);
}

#[test]
fn test_no_wall_run_when_grounded() {
    let tuning = MovementTuning::default();
    let world = FakeWorld {
        ground: true,
        left_wall: Some(Vec3::X),
        ..default()
    };
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.frame_update(&mut body, &world, &FakeInput::default(), &tuning, DT);

    assert!(!state.is_wall_running);
    assert_eq!(state.mode(), MovementMode::Grounded);
    assert_gravity_invariant(&state, &body);
}

#[test]
fn test_wall_run_lasts_full_duration() {
    let tuning = MovementTuning {
        wall_run_duration: 1.5,
        ..default()
    };
    let world = FakeWorld::airborne_by_left_wall();
    let input = FakeInput::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    let mut ended_on = None;
    for frame in 1..=200 {
        state.frame_update(&mut body, &world, &input, &tuning, DT);
        assert_gravity_invariant(&state, &body);
        if !state.is_wall_running {
            ended_on = Some(frame);
            break;
        }
    }

    let ended_on = ended_on.expect("wall run never ended");
    assert!(ended_on >= 90, "wall run ended early on frame {ended_on}");
    assert!(ended_on <= 91, "wall run overran to frame {ended_on}");
}

#[test]
fn test_wall_run_ends_same_frame_wall_is_lost() {
    let tuning = MovementTuning::default();
    let input = FakeInput::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.frame_update(&mut body, &FakeWorld::airborne_by_left_wall(), &input, &tuning, DT);
    assert!(state.is_wall_running);

    state.frame_update(&mut body, &FakeWorld::default(), &input, &tuning, DT);

    assert!(!state.is_wall_running);
    assert!(state.wall_run_timer > 0.0);
    assert_gravity_invariant(&state, &body);
}

#[test]
fn test_wall_run_ends_same_frame_ground_is_touched() {
    let tuning = MovementTuning::default();
    let input = FakeInput::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.frame_update(&mut body, &FakeWorld::airborne_by_left_wall(), &input, &tuning, DT);
    assert!(state.is_wall_running);

    let landed = FakeWorld {
        ground: true,
        left_wall: Some(Vec3::X),
        ..default()
    };
    state.frame_update(&mut body, &landed, &input, &tuning, DT);

    assert!(!state.is_wall_running);
    assert_eq!(state.mode(), MovementMode::Grounded);
    assert_gravity_invariant(&state, &body);
}

#[test]
fn test_reentry_does_not_reset_timer() {
    let tuning = MovementTuning::default();
    let world = FakeWorld::airborne_by_left_wall();
    let input = FakeInput::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    for _ in 0..10 {
        state.frame_update(&mut body, &world, &input, &tuning, DT);
    }
    let timer = state.wall_run_timer;

    state.start_wall_run(&mut body, &tuning);

    assert_eq!(state.wall_run_timer, timer);
    assert!(state.is_wall_running);
}

#[test]
fn test_no_wall_movement_on_frame_wall_run_expires() {
    let tuning = MovementTuning {
        wall_run_duration: DT * 0.5,
        ..default()
    };
    let world = FakeWorld::airborne_by_left_wall();
    let input = FakeInput {
        axis: Vec2::new(0.0, 1.0),
        jump: true,
    };
    let mut body = FakeBody {
        velocity: Vec3::new(0.0, -1.0, 0.0),
        ..default()
    };
    let mut state = MovementState::default();

    let jump = state.frame_update(&mut body, &world, &input, &tuning, DT);

    // Expired before the jump check: no wall jump, velocity untouched
    assert!(jump.is_none());
    assert!(!state.is_wall_running);
    assert_eq!(body.velocity, Vec3::new(0.0, -1.0, 0.0));
    assert_gravity_invariant(&state, &body);
}

// -----------------------------------------------------------------------------
// Jumps
// -----------------------------------------------------------------------------

#[test]
fn test_ground_jump_sets_exact_vertical_velocity() {
    let tuning = MovementTuning::default();
    let world = FakeWorld {
        ground: true,
        ..default()
    };
    let input = FakeInput {
        axis: Vec2::ZERO,
        jump: true,
    };
    let mut body = FakeBody {
        velocity: Vec3::new(0.0, -3.0, 0.0),
        ..default()
    };
    let mut state = MovementState::default();

    let jump = state.frame_update(&mut body, &world, &input, &tuning, DT);

    assert_eq!(jump, Some(JumpKind::Ground));
    assert_eq!(body.velocity.y, tuning.jump_force);
}

#[test]
fn test_no_ground_jump_while_airborne() {
    let tuning = MovementTuning::default();
    let input = FakeInput {
        axis: Vec2::ZERO,
        jump: true,
    };
    let mut body = FakeBody {
        velocity: Vec3::new(0.0, -3.0, 0.0),
        ..default()
    };
    let mut state = MovementState::default();

    let jump = state.frame_update(&mut body, &FakeWorld::default(), &input, &tuning, DT);

    assert!(jump.is_none());
    assert_eq!(body.velocity.y, -3.0);
}

#[test]
fn test_wall_jump_direction_and_multiplier() {
    for multiplier in [1.5, 1.0] {
        let tuning = MovementTuning {
            wall_jump_multiplier: multiplier,
            ..default()
        };
        let world = FakeWorld::airborne_by_left_wall();
        let mut body = FakeBody::default();
        let mut state = MovementState::default();

        state.frame_update(&mut body, &world, &FakeInput::default(), &tuning, DT);
        assert!(state.is_wall_running);

        let jump_input = FakeInput {
            axis: Vec2::ZERO,
            jump: true,
        };
        let jump = state.frame_update(&mut body, &world, &jump_input, &tuning, DT);

        let expected = Vec3::new(1.0, 1.0, 0.0).normalize() * tuning.jump_force * multiplier;
        assert_eq!(jump, Some(JumpKind::Wall));
        assert!(
            body.velocity.abs_diff_eq(expected, 1e-5),
            "got {:?}, expected {:?}",
            body.velocity,
            expected
        );
        assert!(!state.is_wall_running);
        assert_gravity_invariant(&state, &body);
    }
}

// -----------------------------------------------------------------------------
// Planar movement
// -----------------------------------------------------------------------------

#[test]
fn test_planar_input_preserves_vertical_velocity() {
    let tuning = MovementTuning::default();
    let input = FakeInput {
        axis: Vec2::new(1.0, 0.0),
        jump: false,
    };
    let mut body = FakeBody {
        velocity: Vec3::new(3.0, -2.0, 7.0),
        ..default()
    };
    let state = MovementState::default();

    state.apply_planar_input(&mut body, &input, &tuning);

    assert_eq!(body.velocity, Vec3::new(tuning.move_speed, -2.0, 0.0));
}

#[test]
fn test_diagonal_input_is_clamped_to_move_speed() {
    let tuning = MovementTuning::default();
    let input = FakeInput {
        axis: Vec2::new(1.0, 1.0),
        jump: false,
    };
    let mut body = FakeBody::default();
    let state = MovementState::default();

    state.apply_planar_input(&mut body, &input, &tuning);

    let horizontal = Vec2::new(body.velocity.x, body.velocity.z).length();
    assert!((horizontal - tuning.move_speed).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Fixed step
// -----------------------------------------------------------------------------

#[test]
fn test_fixed_update_applies_stick_force_while_wall_running() {
    let tuning = MovementTuning {
        wall_stick_force: 4.0,
        ..default()
    };
    let world = FakeWorld::airborne_by_left_wall();
    let input = FakeInput {
        axis: Vec2::new(0.0, 1.0),
        jump: false,
    };
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.frame_update(&mut body, &world, &input, &tuning, DT);
    body.forces.clear();
    body.velocity = Vec3::new(0.0, 0.5, 0.0);

    state.fixed_update(&mut body, &world, &input, &tuning);

    assert_eq!(body.forces, vec![(Vec3::new(-4.0, 0.0, 0.0), ForceMode::Force)]);
    assert_eq!(body.velocity, Vec3::new(0.0, 0.5, tuning.move_speed));
}

#[test]
fn test_fixed_update_applies_custom_gravity_when_airborne() {
    let tuning = MovementTuning::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.fixed_update(&mut body, &FakeWorld::default(), &FakeInput::default(), &tuning);

    assert_eq!(
        body.forces,
        vec![(Vec3::new(0.0, tuning.gravity, 0.0), ForceMode::Acceleration)]
    );
}

#[test]
fn test_fixed_update_applies_no_force_when_grounded() {
    let tuning = MovementTuning::default();
    let world = FakeWorld {
        ground: true,
        ..default()
    };
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.fixed_update(&mut body, &world, &FakeInput::default(), &tuning);

    assert!(body.forces.is_empty());
}

#[test]
fn test_fixed_update_never_enters_wall_run() {
    let tuning = MovementTuning::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.fixed_update(
        &mut body,
        &FakeWorld::airborne_by_left_wall(),
        &FakeInput::default(),
        &tuning,
    );

    assert!(!state.is_wall_running);
    assert_gravity_invariant(&state, &body);
}

#[test]
fn test_fixed_update_exits_wall_run_when_wall_lost() {
    let tuning = MovementTuning::default();
    let input = FakeInput::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.frame_update(&mut body, &FakeWorld::airborne_by_left_wall(), &input, &tuning, DT);
    body.forces.clear();

    state.fixed_update(&mut body, &FakeWorld::default(), &input, &tuning);

    assert!(!state.is_wall_running);
    assert_gravity_invariant(&state, &body);
    // Falls back to custom gravity on the same step
    assert_eq!(body.forces.len(), 1);
    assert_eq!(body.forces[0].1, ForceMode::Acceleration);
}

#[test]
fn test_gravity_invariant_across_mixed_sequence() {
    let tuning = MovementTuning::default();
    let wall = FakeWorld::airborne_by_left_wall();
    let air = FakeWorld::default();
    let ground = FakeWorld {
        ground: true,
        ..default()
    };
    let idle = FakeInput::default();
    let jump = FakeInput {
        axis: Vec2::ZERO,
        jump: true,
    };

    let script: [(&FakeWorld, &FakeInput); 8] = [
        (&ground, &jump),
        (&air, &idle),
        (&wall, &idle),
        (&wall, &idle),
        (&wall, &jump),
        (&wall, &idle),
        (&air, &idle),
        (&ground, &idle),
    ];

    let mut body = FakeBody::default();
    let mut state = MovementState::default();
    for (world, input) in script {
        state.fixed_update(&mut body, world, input, &tuning);
        assert_gravity_invariant(&state, &body);
        state.frame_update(&mut body, world, input, &tuning, DT);
        assert_gravity_invariant(&state, &body);
    }
}

#[test]
fn test_freeze_stops_body_and_wall_run() {
    let tuning = MovementTuning::default();
    let mut body = FakeBody::default();
    let mut state = MovementState::default();

    state.frame_update(
        &mut body,
        &FakeWorld::airborne_by_left_wall(),
        &FakeInput::default(),
        &tuning,
        DT,
    );
    body.velocity = Vec3::new(2.0, 3.0, 4.0);

    state.freeze(&mut body);

    assert!(body.frozen);
    assert_eq!(body.velocity, Vec3::ZERO);
    assert!(!state.is_wall_running);
    assert_gravity_invariant(&state, &body);
}

// -----------------------------------------------------------------------------
// Tuning helpers
// -----------------------------------------------------------------------------

#[test]
fn test_single_jump_height_combines_gravities() {
    let tuning = MovementTuning {
        jump_force: 10.0,
        gravity: -10.0,
        ..default()
    };
    let world_gravity = Vec3::new(0.0, -10.0, 0.0);

    assert_eq!(tuning.fall_acceleration(world_gravity), 20.0);
    assert!((tuning.single_jump_height(world_gravity) - 2.5).abs() < 1e-6);
    assert!((tuning.safe_reachable_height(world_gravity) - 2.0).abs() < 1e-6);
}

#[test]
fn test_single_jump_height_without_gravity_is_unbounded() {
    let tuning = MovementTuning {
        gravity: 0.0,
        ..default()
    };
    assert!(tuning.single_jump_height(Vec3::ZERO).is_infinite());
}
