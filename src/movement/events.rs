//! Movement domain: events emitted by the locomotion systems.

use bevy::ecs::message::Message;

use crate::movement::JumpKind;

/// Fired once per ground jump or wall jump
#[derive(Debug, Clone, Copy)]
pub struct JumpEvent {
    pub kind: JumpKind,
}

impl Message for JumpEvent {}
