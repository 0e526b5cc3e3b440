//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Run,
    /// One-frame hop between two runs; leaving `Run` tears the level down.
    Reloading,
}
