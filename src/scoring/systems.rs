//! Scoring domain: score accrual, threshold checks and run end handling.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::{GAME_OVER_PAUSE, GameplayPaused, RestartSchedule};
use crate::movement::{JumpEvent, Player};
use crate::scoring::{RunEndedEvent, RunScore, ScoringRules};

/// Run condition: score, thresholds and restarts are active
pub fn scoring_enabled(rules: Res<ScoringRules>) -> bool {
    rules.enabled
}

pub(crate) fn reset_score(mut score: ResMut<RunScore>) {
    score.reset();
}

pub(crate) fn score_jumps(
    mut jumps: MessageReader<JumpEvent>,
    rules: Res<ScoringRules>,
    mut score: ResMut<RunScore>,
    mut run_ended: MessageWriter<RunEndedEvent>,
) {
    for jump in jumps.read() {
        if score.game_over {
            continue;
        }

        let outcome = score.register_jump(&rules);
        debug!("{:?} jump scored: {}", jump.kind, score.current);

        let Some(outcome) = outcome else {
            continue;
        };
        if score.finish(outcome) {
            run_ended.write(RunEndedEvent {
                outcome,
                final_score: score.current,
            });
        }
    }
}

pub fn check_run_thresholds(
    rules: Res<ScoringRules>,
    mut score: ResMut<RunScore>,
    player_query: Query<&Transform, With<Player>>,
    mut run_ended: MessageWriter<RunEndedEvent>,
) {
    if score.game_over {
        return;
    }

    let Ok(transform) = player_query.single() else {
        return;
    };

    let Some(outcome) = score.evaluate_position(transform.translation, &rules) else {
        return;
    };
    if score.finish(outcome) {
        run_ended.write(RunEndedEvent {
            outcome,
            final_score: score.current,
        });
    }
}

/// Pause gameplay and schedule the level reload.
pub(crate) fn end_run(
    mut run_ended: MessageReader<RunEndedEvent>,
    rules: Res<ScoringRules>,
    mut paused: ResMut<GameplayPaused>,
    mut restart: ResMut<RestartSchedule>,
) {
    for event in run_ended.read() {
        info!(
            "Run over: {:?} with score {}. Restarting in {}s",
            event.outcome, event.final_score, rules.restart_delay
        );

        paused.pause(GAME_OVER_PAUSE);
        restart.schedule(rules.restart_delay);
    }
}
