use bevy::prelude::*;

use crate::fsm::StateMachine;

#[derive(Component)]
pub struct Player;

/// The state machine driving this character.
#[derive(Component)]
pub struct CharacterBrain {
  pub machine: StateMachine,
}

impl CharacterBrain {
  pub fn new(machine: StateMachine) -> Self {
    Self { machine }
  }
}

/// Pose bookkeeping that outlives a single tick.
#[derive(Component, Debug, Clone)]
pub struct BodyState {
  /// Aim pitch in degrees, written by the shooting state for the camera rig.
  pub aim_pitch: f32,
  /// While false the character controller is bypassed and states reposition
  /// the body directly (climbing).
  pub controller_enabled: bool,
}

impl Default for BodyState {
  fn default() -> Self {
    Self {
      aim_pitch: 0.0,
      controller_enabled: true,
    }
  }
}

/// The body pose as one tick's states see it. Copied out of the ECS before
/// the machine is serviced and written back afterwards.
#[derive(Debug, Clone)]
pub struct BodyFrame {
  pub translation: Vec3,
  pub rotation: Quat,
  pub aim_pitch: f32,
  pub controller_enabled: bool,
}

impl Default for BodyFrame {
  fn default() -> Self {
    Self {
      translation: Vec3::ZERO,
      rotation: Quat::IDENTITY,
      aim_pitch: 0.0,
      controller_enabled: true,
    }
  }
}
