//! Core domain: shared resources for run configuration and lifecycle.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;
use std::time::Duration;

/// Pause source held from the end of a run until the next one starts.
pub const GAME_OVER_PAUSE: &str = "game_over";

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
    /// When set, every run reuses this seed and the track is reproducible.
    pub fixed_seed: Option<u64>,
    pub run_index: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            fixed_seed: None,
            run_index: 0,
        }
    }
}

impl RunConfig {
    /// Pick the seed for the next run and bump the run counter.
    pub fn begin_run(&mut self) -> u64 {
        self.seed = match self.fixed_seed {
            Some(seed) => seed,
            None => rand::rng().random(),
        };
        self.run_index += 1;
        self.seed
    }
}

/// One-shot restart timer owned by the run session.
///
/// Scheduled when the run ends, cancelled whenever the level is torn down
/// so a pending restart never fires against a level that no longer exists.
#[derive(Resource, Debug, Default)]
pub struct RestartSchedule {
    timer: Option<Timer>,
}

impl RestartSchedule {
    pub fn schedule(&mut self, delay_secs: f32) {
        self.timer = Some(Timer::from_seconds(delay_secs, TimerMode::Once));
    }

    pub fn cancel(&mut self) {
        self.timer = None;
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    pub fn remaining_secs(&self) -> Option<f32> {
        self.timer.as_ref().map(Timer::remaining_secs)
    }

    /// Advance the timer. Returns true exactly once, when it fires.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        timer.tick(delta);
        if timer.just_finished() {
            self.timer = None;
            return true;
        }

        false
    }
}
