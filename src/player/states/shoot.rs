use bevy::prelude::*;

use crate::fsm::{CharacterState, StateArgs, StateContext, StateId};
use crate::player::locomotion::{controller_shape, Locomotion};

/// Mouse-look sensitivity while aiming, per axis.
const SHOOT_SENSITIVITY: Vec2 = Vec2::new(0.05, 0.025);
const PITCH_LIMIT_DEGREES: f32 = 70.0;

/// Aiming locomotion: slower camera-relative strafing, mouse-look yaw applied
/// to the body and pitch published for the camera rig.
pub struct ShootState {
  locomotion: Locomotion,
  vertical_angle: f32,
}

impl ShootState {
  pub fn new() -> Self {
    Self {
      locomotion: Locomotion::default(),
      vertical_angle: 0.0,
    }
  }

  fn set_look_direction(&mut self, ctx: &mut StateContext) {
    let mut flat = ctx.camera.forward;
    flat.y = 0.0;
    let flat = flat.normalize_or_zero();
    if flat != Vec3::ZERO {
      ctx.body.rotation = Transform::default().looking_to(flat, Vec3::Y).rotation;
    }

    let look = ctx.input.look_delta;
    let yaw = Quat::from_rotation_y(-look.x * SHOOT_SENSITIVITY.x.to_radians());
    ctx.body.rotation = yaw * ctx.body.rotation;

    self.vertical_angle = (self.vertical_angle - look.y * SHOOT_SENSITIVITY.y)
      .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
    ctx.body.aim_pitch = self.vertical_angle;
  }
}

impl CharacterState for ShootState {
  fn id(&self) -> StateId {
    StateId::Shoot
  }

  fn transitions(&self) -> &'static [StateId] {
    &[StateId::Movement]
  }

  fn enter(&mut self, ctx: &mut StateContext, _previous: Option<StateId>, _args: &StateArgs) {
    info!("entering shoot state");
    self.locomotion.reset();
    self.vertical_angle = ctx.body.aim_pitch;
  }

  fn service(&mut self, ctx: &mut StateContext) {
    if !ctx.input.aim {
      ctx.switch_to(StateId::Movement);
      return;
    }

    self.set_look_direction(ctx);

    let axis = ctx.input.move_axis;
    let mut direction = ctx.camera.forward * axis.y + ctx.camera.right * axis.x;
    direction.y = 0.0;
    let horizontal = direction.normalize_or_zero() * ctx.config.shooting_walk_speed;

    let shape = controller_shape(ctx.config);
    self.locomotion.apply_gravity(
      ctx.body.translation,
      &shape,
      ctx.physics,
      ctx.config,
      horizontal,
      None,
      ctx.dt,
    );

    if ctx.input.fire {
      trace!("fire");
    }
  }
}
