use bevy::prelude::*;

use crate::fsm::{CharacterState, StateArg, StateArgs, StateContext, StateId};

/// Scripted ledge climb: the controller is bypassed and the body is tweened
/// straight to the target point handed over by the movement state.
pub struct ClimbState {
  target: Vec3,
  move_direction: Vec3,
}

impl ClimbState {
  pub fn new() -> Self {
    Self {
      target: Vec3::ZERO,
      move_direction: Vec3::ZERO,
    }
  }
}

impl CharacterState for ClimbState {
  fn id(&self) -> StateId {
    StateId::Climb
  }

  fn transitions(&self) -> &'static [StateId] {
    &[StateId::Movement]
  }

  fn enter(&mut self, ctx: &mut StateContext, _previous: Option<StateId>, args: &StateArgs) {
    let mut target = None;
    let mut direction = None;
    for arg in args {
      match arg {
        StateArg::Point(point) => target = Some(*point),
        StateArg::Direction(dir) => direction = Some(*dir),
      }
    }
    let Some(target) = target else {
      warn!("climb state entered without a target point, bailing out");
      ctx.switch_to(StateId::Movement);
      return;
    };

    self.target = target;
    self.move_direction = direction.unwrap_or(Vec3::ZERO);
    ctx.body.controller_enabled = false;
    info!("climbing to {target}");

    if self.move_direction != Vec3::ZERO {
      ctx.body.rotation = Transform::default()
        .looking_to(self.move_direction, Vec3::Y)
        .rotation;
    }
  }

  fn service(&mut self, ctx: &mut StateContext) {
    let step = ctx.config.climb_speed * ctx.dt;
    let to_target = self.target - ctx.body.translation;
    if to_target.length() <= step {
      ctx.body.translation = self.target;
      ctx.switch_to(StateId::Movement);
      return;
    }
    ctx.body.translation += to_target.normalize() * step;
  }

  fn exit(&mut self, ctx: &mut StateContext, _next: Option<StateId>, _args: &StateArgs) {
    ctx.body.controller_enabled = true;
  }
}
