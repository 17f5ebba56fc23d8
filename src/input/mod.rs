pub mod actions;
mod bindings;
mod snapshot;

pub use actions::{Aim, Fire, Jump, Move, PlayerInput, Sprint};
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;
pub use bindings::player_input_actions;
pub use snapshot::{sample_input, InputSnapshot};

pub struct InputPlugin;

impl Plugin for InputPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(EnhancedInputPlugin)
      .add_input_context::<PlayerInput>()
      .init_resource::<InputSnapshot>();
  }
}
