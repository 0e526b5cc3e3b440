//! Validation for loaded gameplay values.

use bevy::prelude::*;

use super::data::*;
use crate::movement::MovementTuning;
use crate::track::TrackTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $ok:expr, $section:expr, $field:expr, $($message:tt)+) => {
        if !$ok {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($message)+),
            });
        }
    };
}

/// Validate every section. Returns a list of errors, empty if the values
/// are usable.
pub fn validate_gameplay(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        defaults.schema_version == SCHEMA_VERSION,
        "gameplay",
        "schema_version",
        "expected {}, found {}",
        SCHEMA_VERSION,
        defaults.schema_version
    );

    validate_movement(&defaults.movement, &mut errors);
    validate_track(&defaults.track, &mut errors);
    validate_scoring(&defaults.scoring, &mut errors);

    errors
}

fn validate_movement(def: &MovementDef, errors: &mut Vec<ValidationError>) {
    let positive = [
        ("jump_force", def.jump_force),
        ("wall_run_duration", def.wall_run_duration),
        ("wall_check_distance", def.wall_check_distance),
        ("ground_check_distance", def.ground_check_distance),
        ("wall_jump_multiplier", def.wall_jump_multiplier),
        ("body_mass", def.body_mass),
    ];
    for (field, value) in positive {
        check!(errors, value > 0.0, "movement", field, "must be > 0, found {}", value);
    }

    let non_negative = [
        ("move_speed", def.move_speed),
        ("wall_probe_radius", def.wall_probe_radius),
        ("wall_stick_force", def.wall_stick_force),
    ];
    for (field, value) in non_negative {
        check!(errors, value >= 0.0, "movement", field, "must be >= 0, found {}", value);
    }

    check_finite(
        errors,
        "movement",
        &[
            ("move_speed", def.move_speed),
            ("jump_force", def.jump_force),
            ("wall_run_duration", def.wall_run_duration),
            ("wall_check_distance", def.wall_check_distance),
            ("wall_probe_radius", def.wall_probe_radius),
            ("ground_check_distance", def.ground_check_distance),
            ("wall_stick_force", def.wall_stick_force),
            ("gravity", def.gravity),
            ("wall_jump_multiplier", def.wall_jump_multiplier),
            ("body_mass", def.body_mass),
        ],
        &[],
    );
}

fn validate_track(def: &TrackDef, errors: &mut Vec<ValidationError>) {
    // The cursor must move forward on every spawn.
    check!(
        errors,
        def.min_distance > 0.0,
        "track",
        "min_distance",
        "must be > 0, found {}",
        def.min_distance
    );
    check!(
        errors,
        def.min_distance <= def.max_distance,
        "track",
        "max_distance",
        "must be >= min_distance ({}), found {}",
        def.min_distance,
        def.max_distance
    );
    check!(
        errors,
        def.min_height <= def.max_height,
        "track",
        "max_height",
        "must be >= min_height ({}), found {}",
        def.min_height,
        def.max_height
    );
    check!(
        errors,
        (0.0..=1.0).contains(&def.wall_run_chance),
        "track",
        "wall_run_chance",
        "must be within [0, 1], found {}",
        def.wall_run_chance
    );
    check!(
        errors,
        def.max_spawns_per_frame >= 1,
        "track",
        "max_spawns_per_frame",
        "must be at least 1"
    );

    let non_negative = [
        ("spawn_distance", def.spawn_distance),
        ("max_yaw_degrees", def.max_yaw_degrees),
        ("wall_offset", def.wall_offset),
    ];
    for (field, value) in non_negative {
        check!(errors, value >= 0.0, "track", field, "must be >= 0, found {}", value);
    }

    if let Some(despawn_distance) = def.despawn_distance {
        check!(
            errors,
            despawn_distance.is_finite() && despawn_distance > 0.0,
            "track",
            "despawn_distance",
            "must be finite and > 0 when set, found {}",
            despawn_distance
        );
    }

    for (field, size) in [("platform_size", def.platform_size), ("wall_size", def.wall_size)] {
        check!(
            errors,
            size.iter().all(|extent| *extent > 0.0),
            "track",
            field,
            "every extent must be > 0, found {:?}",
            size
        );
    }

    // Range bounds feed the generator's uniform draws, which reject inf/NaN.
    check_finite(
        errors,
        "track",
        &[
            ("spawn_distance", def.spawn_distance),
            ("min_distance", def.min_distance),
            ("max_distance", def.max_distance),
            ("min_height", def.min_height),
            ("max_height", def.max_height),
            ("max_yaw_degrees", def.max_yaw_degrees),
            ("wall_run_chance", def.wall_run_chance),
            ("wall_offset", def.wall_offset),
        ],
        &[
            ("origin", def.origin),
            ("platform_size", def.platform_size),
            ("wall_size", def.wall_size),
        ],
    );
}

fn validate_scoring(def: &ScoringDef, errors: &mut Vec<ValidationError>) {
    check!(
        errors,
        def.required_score >= 1,
        "scoring",
        "required_score",
        "must be at least 1"
    );
    check!(
        errors,
        def.restart_delay >= 0.0,
        "scoring",
        "restart_delay",
        "must be >= 0, found {}",
        def.restart_delay
    );

    check_finite(
        errors,
        "scoring",
        &[
            ("fall_y_threshold", def.fall_y_threshold),
            ("win_z_threshold", def.win_z_threshold),
            ("restart_delay", def.restart_delay),
        ],
        &[],
    );
}

/// RON accepts `inf` and `NaN`, so every float is checked here.
fn check_finite(
    errors: &mut Vec<ValidationError>,
    section: &'static str,
    scalars: &[(&'static str, f32)],
    vectors: &[(&'static str, [f32; 3])],
) {
    for &(field, value) in scalars {
        check!(errors, value.is_finite(), section, field, "must be finite, found {}", value);
    }
    for &(field, value) in vectors {
        check!(
            errors,
            value.iter().all(|v| v.is_finite()),
            section,
            field,
            "must be finite, found {:?}",
            value
        );
    }
}

/// Returns the safe step height when the track's tallest step exceeds it.
///
/// Advisory only: a tall step is still reachable from a wall-jump.
pub fn unreachable_step_height(
    movement: &MovementTuning,
    track: &TrackTuning,
    world_gravity: Vec3,
) -> Option<f32> {
    let safe = movement.safe_reachable_height(world_gravity);
    (track.max_height > safe).then_some(safe)
}
