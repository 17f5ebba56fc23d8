pub mod components;
pub mod drive;
pub mod locomotion;
pub mod spawn;
pub mod states;
pub mod view;


use bevy::prelude::*;
use bevy_rapier3d::plugin::PhysicsSet;

pub use components::{BodyFrame, BodyState, CharacterBrain, Player};
pub use spawn::standard_state_machine;
pub use view::{AnimationFlags, AnimationView};

use crate::core::camera;
use crate::input;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, spawn::spawn_player).add_systems(
      FixedUpdate,
      (
        camera::update_camera_basis,
        input::sample_input,
        drive::drive_character,
      )
        .chain()
        .before(PhysicsSet::SyncBackend),
    );
  }
}
