//! Scoring domain: run outcome events.

use bevy::ecs::message::Message;

use crate::scoring::RunOutcome;

/// Fired once per run, the moment it is won or lost
#[derive(Debug, Clone, Copy)]
pub struct RunEndedEvent {
    pub outcome: RunOutcome,
    pub final_score: u32,
}

impl Message for RunEndedEvent {}
