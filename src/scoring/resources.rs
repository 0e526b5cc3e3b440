//! Scoring domain: rules, score tracking and win/lose evaluation.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ScoringRules {
    /// Disables score, thresholds and restarts entirely (free-run variant).
    pub enabled: bool,
    pub required_score: u32,
    pub fall_y_threshold: f32,
    pub win_z_threshold: f32,
    pub restart_delay: f32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            enabled: true,
            required_score: 50,
            fall_y_threshold: -25.0,
            win_z_threshold: 500.0,
            restart_delay: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Won(WinReason),
    Lost(LoseReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    ScoreReached,
    FinishLineCrossed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoseReason {
    Fell,
}

impl RunOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, RunOutcome::Won(_))
    }

    pub fn headline(&self) -> &'static str {
        match self {
            RunOutcome::Won(_) => "YOU WIN",
            RunOutcome::Lost(_) => "YOU FELL",
        }
    }
}

/// Score and game-over latch for the current run.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct RunScore {
    pub current: u32,
    pub game_over: bool,
    pub outcome: Option<RunOutcome>,
}

impl RunScore {
    /// Count one jump. Returns a win once the required score is reached.
    /// Ignored after game over.
    pub fn register_jump(&mut self, rules: &ScoringRules) -> Option<RunOutcome> {
        if self.game_over {
            return None;
        }

        self.current += 1;
        (self.current >= rules.required_score).then_some(RunOutcome::Won(WinReason::ScoreReached))
    }

    /// Check the fall and finish-line thresholds. Falling is checked first.
    pub fn evaluate_position(&self, position: Vec3, rules: &ScoringRules) -> Option<RunOutcome> {
        if self.game_over {
            return None;
        }

        if position.y < rules.fall_y_threshold {
            Some(RunOutcome::Lost(LoseReason::Fell))
        } else if position.z >= rules.win_z_threshold {
            Some(RunOutcome::Won(WinReason::FinishLineCrossed))
        } else {
            None
        }
    }

    /// Latch the outcome. Returns false if the run was already over.
    pub fn finish(&mut self, outcome: RunOutcome) -> bool {
        if self.game_over {
            return false;
        }

        self.game_over = true;
        self.outcome = Some(outcome);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn display_text(&self) -> String {
        format!("Score: {}", self.current)
    }
}
