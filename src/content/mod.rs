//! Content domain: gameplay values loaded from RON at startup.

mod data;
mod loader;
mod validation;


pub use data::{GameplayDefaults, MovementDef, SCHEMA_VERSION, ScoringDef, TrackDef};
pub use loader::{ContentLoadError, load_gameplay_defaults, parse_gameplay_defaults};
pub use validation::{ValidationError, unreachable_step_height, validate_gameplay};

use avian3d::prelude::Gravity;
use bevy::prelude::*;
use std::path::Path;

use crate::core::RunConfig;
use crate::movement::MovementTuning;
use crate::scoring::ScoringRules;
use crate::track::TrackTuning;

pub const GAMEPLAY_DEFAULTS_PATH: &str = "assets/data/gameplay.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GameplayDefaults>()
            .register_type::<MovementDef>()
            .register_type::<TrackDef>()
            .register_type::<ScoringDef>()
            .add_systems(PreStartup, load_gameplay_content);
    }
}

/// Fall back to built-in values when the file is missing or invalid.
pub fn resolve_gameplay_defaults(
    loaded: Result<GameplayDefaults, ContentLoadError>,
) -> GameplayDefaults {
    let defaults = match loaded {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("{}; using built-in gameplay defaults", e);
            return GameplayDefaults::default();
        }
    };

    let errors = validate_gameplay(&defaults);
    if errors.is_empty() {
        return defaults;
    }

    for error in &errors {
        error!("Invalid gameplay value {}", error);
    }
    warn!(
        "{} invalid gameplay value(s); using built-in gameplay defaults",
        errors.len()
    );
    GameplayDefaults::default()
}

fn load_gameplay_content(
    mut commands: Commands,
    mut run_config: ResMut<RunConfig>,
    gravity: Option<Res<Gravity>>,
) {
    let defaults =
        resolve_gameplay_defaults(load_gameplay_defaults(Path::new(GAMEPLAY_DEFAULTS_PATH)));

    let movement = MovementTuning::from(&defaults.movement);
    let track = TrackTuning::from(&defaults.track);
    let scoring = ScoringRules::from(&defaults.scoring);

    let world_gravity = gravity.map(|g| g.0).unwrap_or(Vec3::ZERO);
    if let Some(safe) = unreachable_step_height(&movement, &track, world_gravity) {
        warn!(
            "Track max_height {} exceeds safe jump height {:.2}; some steps need a wall-jump",
            track.max_height, safe
        );
    }

    info!(
        "Gameplay loaded: seed={:?}, scoring={}, win_z={}, required_score={}",
        defaults.seed, scoring.enabled, scoring.win_z_threshold, scoring.required_score
    );

    run_config.fixed_seed = defaults.seed;
    commands.insert_resource(movement);
    commands.insert_resource(track);
    commands.insert_resource(scoring);
}
