//! Track domain: procedural segment generation and spawning.

mod components;
mod generator;
mod resources;
mod spawn;


pub use components::{Segment, StartPad};
pub use generator::{
    SegmentKind, SegmentPlan, SegmentRecord, SpawnCursor, TRACK_RIGHT, TrackGenerator, WallSide,
};
pub use resources::{ActiveTrack, SegmentPrefabs, TrackTuning};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active, initialize_run};
use crate::track::spawn::{
    clear_track, evict_passed_segments, extend_track, setup_segment_prefabs, setup_track,
};

pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackTuning>()
            .add_systems(Startup, setup_segment_prefabs)
            .add_systems(OnEnter(GameState::Run), setup_track.after(initialize_run))
            .add_systems(OnExit(GameState::Run), clear_track)
            .add_systems(
                Update,
                (extend_track, evict_passed_segments)
                    .chain()
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            );
    }
}
