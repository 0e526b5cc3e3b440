//! UI domain: in-run HUD and the run outcome banner.

mod hud_score;
mod outcome;

use bevy::prelude::*;

use crate::core::GameState;
use crate::scoring::check_run_thresholds;
use crate::ui::hud_score::{spawn_score_display_ui, update_score_display};
use crate::ui::outcome::{show_outcome_banner, update_restart_countdown};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Run), spawn_score_display_ui)
            .add_systems(
                Update,
                (
                    update_score_display,
                    show_outcome_banner.after(check_run_thresholds),
                    update_restart_countdown,
                )
                    .run_if(in_state(GameState::Run)),
            );
    }
}
