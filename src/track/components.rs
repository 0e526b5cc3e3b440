//! Track domain: segment markers.

use bevy::prelude::*;

use crate::track::SegmentKind;

/// A generated piece of track.
#[derive(Component, Debug, Clone, Copy)]
pub struct Segment {
    pub index: u32,
    pub kind: SegmentKind,
}

/// The platform under the player spawn; never despawned during a run.
#[derive(Component, Debug, Default)]
pub struct StartPad;
