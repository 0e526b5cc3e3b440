//! Scoring domain: jump scoring, win/lose thresholds and game over.

mod events;
mod resources;
mod systems;


pub use events::RunEndedEvent;
pub use resources::{LoseReason, RunOutcome, RunScore, ScoringRules, WinReason};
pub use systems::{check_run_thresholds, scoring_enabled};

use bevy::prelude::*;

use crate::core::{GameState, initialize_run};
use crate::movement::systems::update_movement;
use crate::scoring::systems::{end_run, reset_score, score_jumps};

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoringRules>()
            .init_resource::<RunScore>()
            .add_message::<RunEndedEvent>()
            .add_systems(OnEnter(GameState::Run), reset_score.after(initialize_run))
            .add_systems(
                Update,
                (score_jumps, check_run_thresholds, end_run)
                    .chain()
                    .after(update_movement)
                    .run_if(in_state(GameState::Run))
                    .run_if(scoring_enabled),
            );
    }
}
