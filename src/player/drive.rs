//! The per-tick bridge between the ECS and the state machine.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::ConfigLoaded;
use crate::core::camera::CameraBasis;
use crate::fsm::{StateContext, StateId};
use crate::input::InputSnapshot;
use crate::physics::rapier::RapierCharacterPhysics;
use crate::player::components::{BodyFrame, BodyState, CharacterBrain, Player};
use crate::player::view::AnimationFlags;

/// Copy the body pose out of the ECS, service the machine for one fixed tick,
/// then hand the accumulated sweep to the kinematic controller and write the
/// pose back.
pub fn drive_character(
  time: Res<Time>,
  input: Res<InputSnapshot>,
  config: Res<ConfigLoaded>,
  camera: Res<CameraBasis>,
  rapier: ReadRapierContext,
  mut players: Query<
    (
      Entity,
      &mut Transform,
      &mut KinematicCharacterController,
      &mut BodyState,
      &mut CharacterBrain,
      &mut AnimationFlags,
    ),
    With<Player>,
  >,
) {
  let Ok(context) = rapier.single() else {
    return;
  };

  for (entity, mut transform, mut controller, mut body_state, mut brain, mut anim) in &mut players {
    let mut frame = BodyFrame {
      translation: transform.translation,
      rotation: transform.rotation,
      aim_pitch: body_state.aim_pitch,
      controller_enabled: body_state.controller_enabled,
    };

    let mut physics = RapierCharacterPhysics::new(&context, entity);
    let mut ctx = StateContext::new(
      time.delta_secs(),
      &input,
      &config.player,
      &camera,
      &mut frame,
      &mut physics,
      &mut *anim,
    );

    if brain.machine.current().is_none() && !brain.machine.is_disposed() {
      if let Err(err) = brain.machine.switch_state(&mut ctx, StateId::Movement, Vec::new()) {
        error!("initial state switch failed: {err}");
        continue;
      }
    } else {
      brain.machine.service(&mut ctx);
    }

    let displacement = physics.take_translation();
    controller.translation = if frame.controller_enabled && displacement != Vec3::ZERO {
      Some(displacement)
    } else {
      None
    };

    transform.translation = frame.translation;
    transform.rotation = frame.rotation;
    body_state.aim_pitch = frame.aim_pitch;
    body_state.controller_enabled = frame.controller_enabled;
  }
}
