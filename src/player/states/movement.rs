use bevy::prelude::*;

use crate::fsm::{CharacterState, StateArg, StateArgs, StateContext, StateId};
use crate::player::locomotion::{controller_shape, Locomotion};

/// Hits steeper than this (by normal) are treated as climbable faces.
const CLIMB_FACE_MAX_NORMAL_Y: f32 = 0.3;
/// How far past the face to look for the obstacle top.
const CLIMB_TOP_INSET: f32 = 0.3;

/// Camera-relative ground locomotion: walk, sprint, jump, and the probes that
/// hand off to the climb and shoot states.
pub struct MovementState {
  locomotion: Locomotion,
  last_move_direction: Vec3,
  was_moving: bool,
  was_sprinting: bool,
  climb_hold: f32,
}

impl MovementState {
  pub fn new() -> Self {
    Self {
      locomotion: Locomotion::default(),
      last_move_direction: Vec3::ZERO,
      was_moving: false,
      was_sprinting: false,
      climb_hold: 0.0,
    }
  }

  fn update_animation_cues(&mut self, ctx: &mut StateContext, moving: bool, sprinting: bool) {
    if moving && !self.was_moving {
      ctx.anim.start_walking();
    }
    if !moving && self.was_moving {
      ctx.anim.stop_running();
      ctx.anim.stop_walking();
      ctx.anim.start_idling();
    }
    if sprinting && !self.was_sprinting {
      ctx.anim.start_running();
      ctx.anim.stop_walking();
    }
    if !sprinting && self.was_sprinting {
      ctx.anim.stop_running();
      if moving {
        ctx.anim.start_walking();
      }
    }
    self.was_moving = moving;
    self.was_sprinting = sprinting;
  }

  /// While pushing against a near-vertical face, wait out the climb timer and
  /// then hand off to the climb state with the spot on top of the obstacle.
  fn probe_for_climb(&mut self, ctx: &mut StateContext) {
    let origin = ctx.body.translation;
    let Some(face) = ctx
      .physics
      .ray_cast(origin, self.last_move_direction, ctx.config.climb_reach, false)
    else {
      self.climb_hold = 0.0;
      return;
    };
    if face.normal.y.abs() > CLIMB_FACE_MAX_NORMAL_Y {
      self.climb_hold = 0.0;
      return;
    }

    self.climb_hold += ctx.dt;
    if self.climb_hold < ctx.config.wait_climb_timer {
      return;
    }
    self.climb_hold = 0.0;

    let over = face.point - face.normal * CLIMB_TOP_INSET + Vec3::Y * ctx.config.collider_height;
    let Some(top) = ctx.physics.ray_cast(
      over,
      Vec3::NEG_Y,
      ctx.config.collider_height + 0.5,
      false,
    ) else {
      // Face taller than the reach probe; stay on the ground.
      return;
    };

    let target = top.point + Vec3::Y * (ctx.config.collider_height / 2.0);
    ctx.switch_with(
      StateId::Climb,
      vec![
        StateArg::Point(target),
        StateArg::Direction(self.last_move_direction),
      ],
    );
  }
}

impl CharacterState for MovementState {
  fn id(&self) -> StateId {
    StateId::Movement
  }

  fn transitions(&self) -> &'static [StateId] {
    &[StateId::Climb, StateId::Shoot]
  }

  fn enter(&mut self, ctx: &mut StateContext, previous: Option<StateId>, _args: &StateArgs) {
    info!("entering movement state (from {previous:?})");
    self.locomotion.reset();
    self.last_move_direction = Vec3::ZERO;
    self.was_moving = false;
    self.was_sprinting = false;
    self.climb_hold = 0.0;
    ctx.anim.start_idling();
  }

  fn service(&mut self, ctx: &mut StateContext) {
    let axis = ctx.input.move_axis;
    let moving = axis.length_squared() > 0.0;
    let sprinting = ctx.input.sprint;
    self.update_animation_cues(ctx, moving, sprinting);

    let mut horizontal = Vec3::ZERO;
    if moving {
      let mut direction = ctx.camera.forward * axis.y + ctx.camera.right * axis.x;
      direction.y = 0.0;
      let direction = direction.normalize_or_zero();
      if direction != Vec3::ZERO {
        self.last_move_direction = direction;
        let speed = if sprinting {
          ctx.config.run_speed
        } else {
          ctx.config.walk_speed
        };
        horizontal = direction * speed;

        let target = Transform::default().looking_to(direction, Vec3::Y).rotation;
        ctx.body.rotation = ctx
          .body
          .rotation
          .slerp(target, (ctx.config.rotation_speed * ctx.dt).min(1.0));
      }
    }

    let jump_velocity = ctx
      .input
      .jump
      .then(|| (-2.0 * ctx.config.gravity * ctx.config.jump_height).sqrt());

    let shape = controller_shape(ctx.config);
    self.locomotion.apply_gravity(
      ctx.body.translation,
      &shape,
      ctx.physics,
      ctx.config,
      horizontal,
      jump_velocity,
      ctx.dt,
    );

    if moving {
      self.probe_for_climb(ctx);
    } else {
      self.climb_hold = 0.0;
    }

    if ctx.input.aim {
      ctx.switch_to(StateId::Shoot);
    }
  }
}
