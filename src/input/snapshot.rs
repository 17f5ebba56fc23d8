use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use super::actions::{Aim, Fire, Jump, Move, PlayerInput, Sprint};

/// Input sampled once per tick and handed to the active state. States read
/// this instead of subscribing to device events, so a state that never looks
/// at a field simply ignores it and nothing leaks across activations.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
  pub move_axis: Vec2,
  pub look_delta: Vec2,
  pub sprint: bool,
  pub aim: bool,
  /// True only on the tick the button went down.
  pub jump: bool,
  /// True only on the tick the button went down.
  pub fire: bool,
}

#[derive(Default)]
pub struct HeldButtons {
  jump: bool,
  fire: bool,
}

fn active(state: &ActionState) -> bool {
  matches!(state, ActionState::Fired | ActionState::Ongoing)
}

pub fn sample_input(
  players: Query<&Actions<PlayerInput>>,
  moves: Query<(&Action<Move>, &ActionState)>,
  sprints: Query<&ActionState, With<Action<Sprint>>>,
  aims: Query<&ActionState, With<Action<Aim>>>,
  jumps: Query<&ActionState, With<Action<Jump>>>,
  fires: Query<&ActionState, With<Action<Fire>>>,
  mouse: Res<AccumulatedMouseMotion>,
  mut held: Local<HeldButtons>,
  mut snapshot: ResMut<InputSnapshot>,
) {
  let mut move_axis = Vec2::ZERO;
  let mut sprint = false;
  let mut aim = false;
  let mut jump_held = false;
  let mut fire_held = false;

  for actions in &players {
    for action_entity in actions.iter() {
      if let Ok((action, state)) = moves.get(action_entity) {
        if active(state) {
          move_axis = **action;
        }
      }
      if let Ok(state) = sprints.get(action_entity) {
        sprint |= active(state);
      }
      if let Ok(state) = aims.get(action_entity) {
        aim |= active(state);
      }
      if let Ok(state) = jumps.get(action_entity) {
        jump_held |= active(state);
      }
      if let Ok(state) = fires.get(action_entity) {
        fire_held |= active(state);
      }
    }
  }

  snapshot.move_axis = move_axis;
  snapshot.look_delta = mouse.delta;
  snapshot.sprint = sprint;
  snapshot.aim = aim;
  snapshot.jump = jump_held && !held.jump;
  snapshot.fire = fire_held && !held.fire;
  held.jump = jump_held;
  held.fire = fire_held;
}
