use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Aim, Fire, Jump, Move, PlayerInput, Sprint};

pub fn player_input_actions() -> impl Bundle {
  actions!(PlayerInput[
      (
          Action::<Move>::new(),
          Bindings::spawn((
              Cardinal::wasd_keys(),
              Cardinal::arrows(),
          )),
      ),
      (
          Action::<Sprint>::new(),
          bindings![KeyCode::ShiftLeft],
      ),
      (
          Action::<Jump>::new(),
          bindings![KeyCode::Space],
      ),
      (
          Action::<Aim>::new(),
          bindings![MouseButton::Right],
      ),
      (
          Action::<Fire>::new(),
          bindings![MouseButton::Left],
      ),
  ])
}
