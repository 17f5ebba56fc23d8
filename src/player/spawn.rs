use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::config::ConfigLoaded;
use crate::fsm::{FsmError, StateMachine};
use crate::input::{player_input_actions, PlayerInput};
use crate::player::components::{BodyState, CharacterBrain, Player};
use crate::player::states::{ClimbState, MovementState, ShootState};
use crate::player::view::AnimationFlags;

/// The machine the game ships with: strict validation over the three concrete
/// states, with edges resolved lazily from each state's declaration.
pub fn standard_state_machine() -> Result<StateMachine, FsmError> {
  let mut machine = StateMachine::new();
  machine.set_strict(true);
  machine
    .add(Box::new(MovementState::new()))?
    .add(Box::new(ClimbState::new()))?
    .add(Box::new(ShootState::new()))?;
  Ok(machine)
}

pub fn spawn_player(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
) {
  let player = &config.player;
  let machine = standard_state_machine().expect("player state machine wiring is invalid");

  let half_height = (player.collider_height / 2.0 - player.collider_radius).max(0.0);

  commands.spawn((
    Player,
    CharacterBrain::new(machine),
    BodyState::default(),
    AnimationFlags::default(),
    Transform::from_xyz(player.spawn_x, player.spawn_y, player.spawn_z),
    RigidBody::KinematicPositionBased,
    Collider::capsule_y(half_height, player.collider_radius),
    KinematicCharacterController {
      snap_to_ground: Some(CharacterLength::Absolute(0.2)),
      ..default()
    },
    PlayerInput,
    player_input_actions(),
    Mesh3d(meshes.add(Capsule3d::new(player.collider_radius, half_height * 2.0))),
    MeshMaterial3d(materials.add(Color::srgb(0.8, 0.3, 0.2))),
  ));
}
