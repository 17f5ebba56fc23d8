use bevy::prelude::*;

use crate::config::ConfigLoaded;
use crate::player::components::{BodyState, Player};

/// Marker component for the game camera
#[derive(Component)]
pub struct GameCamera;

/// The camera's world basis as the locomotion states see it: full-precision
/// forward and right vectors, flattened by each consumer as needed. Updated
/// once per tick before the states run.
#[derive(Resource, Debug, Clone)]
pub struct CameraBasis {
  pub forward: Vec3,
  pub right: Vec3,
}

impl Default for CameraBasis {
  fn default() -> Self {
    Self {
      forward: Vec3::NEG_Z,
      right: Vec3::X,
    }
  }
}

pub fn setup_camera(mut commands: Commands) {
  commands.spawn((
    GameCamera,
    Camera3d::default(),
    Transform::from_xyz(0.0, 4.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
  ));
}

/// Third-person follow: sit behind the body at the configured distance and
/// height, tilting the look target with the aim pitch.
pub fn camera_follow(
  config: Res<ConfigLoaded>,
  players: Query<(&Transform, &BodyState), (With<Player>, Without<GameCamera>)>,
  mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
  let Ok((player, body)) = players.single() else {
    return;
  };
  let Ok(mut camera) = cameras.single_mut() else {
    return;
  };

  let behind = player.rotation * Vec3::Z;
  let eye =
    player.translation + behind * config.camera.distance + Vec3::Y * config.camera.height;
  let pitch = body.aim_pitch.to_radians();
  let target = player.translation + Vec3::Y * (1.0 + pitch.sin() * config.camera.distance * 0.5);

  *camera = Transform::from_translation(eye).looking_at(target, Vec3::Y);
}

pub fn update_camera_basis(
  mut basis: ResMut<CameraBasis>,
  cameras: Query<&Transform, With<GameCamera>>,
) {
  let Ok(camera) = cameras.single() else {
    warn_once!("no active camera; movement keeps the last known basis");
    return;
  };
  basis.forward = *camera.forward();
  basis.right = *camera.right();
}
