//! Movement domain: player locomotion plugin wiring and public exports.

pub(crate) mod bootstrap;
mod components;
mod controller;
mod events;
mod resources;
pub(crate) mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, MovementMode, MovementState, Player, Wall};
pub use controller::{
    ForceMode, InputSource, JumpKind, MotionBody, PhysicsQuery, SurfaceHit, SurfaceKind,
};
pub use events::JumpEvent;
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active, initialize_run};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_fixed_movement, freeze_player_on_run_end, read_input, update_movement,
};
use crate::scoring::check_run_thresholds;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpEvent>()
            .add_systems(OnEnter(GameState::Run), spawn_player.after(initialize_run))
            .add_systems(
                FixedUpdate,
                apply_fixed_movement
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                (read_input, update_movement)
                    .chain()
                    .run_if(in_state(GameState::Run))
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                freeze_player_on_run_end
                    .after(check_run_thresholds)
                    .run_if(in_state(GameState::Run)),
            );
    }
}
