mod plugin;

use bevy::{asset::Asset, prelude::*, reflect::TypePath};
pub use plugin::ConfigPlugin;
use serde::Deserialize;

#[derive(Asset, TypePath, Deserialize, Debug, Clone)]
pub struct GameConfig {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub player: PlayerConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
  pub width: u32,
  pub height: u32,
  pub title: String,
}

impl Default for WindowConfig {
  fn default() -> Self {
    Self {
      width: 1280,
      height: 720,
      title: "kinema".to_string(),
    }
  }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CameraConfig {
  pub distance: f32,
  pub height: f32,
}

impl Default for CameraConfig {
  fn default() -> Self {
    Self {
      distance: 6.0,
      height: 2.5,
    }
  }
}

/// Character tunables. Read-only at runtime; hot-reloaded as a whole when the
/// config asset changes.
#[derive(Deserialize, Debug, Clone)]
pub struct PlayerConfig {
  pub spawn_x: f32,
  pub spawn_y: f32,
  pub spawn_z: f32,
  pub collider_radius: f32,
  pub collider_height: f32,
  pub walk_speed: f32,
  pub run_speed: f32,
  pub shooting_walk_speed: f32,
  pub jump_height: f32,
  pub rotation_speed: f32,
  /// Negative, in units per second squared.
  pub gravity: f32,
  /// Minimum ground angle, in degrees, before the body starts sliding.
  pub slope_limit_angle: f32,
  pub slide_speed: f32,
  /// Seconds the body must hold against a climbable face before climbing.
  pub wait_climb_timer: f32,
  pub climb_reach: f32,
  pub climb_speed: f32,
}

impl Default for PlayerConfig {
  fn default() -> Self {
    Self {
      spawn_x: 0.0,
      spawn_y: 2.0,
      spawn_z: 0.0,
      collider_radius: 0.35,
      collider_height: 1.8,
      walk_speed: 3.0,
      run_speed: 6.0,
      shooting_walk_speed: 4.0,
      jump_height: 1.2,
      rotation_speed: 10.0,
      gravity: -9.81,
      slope_limit_angle: 30.0,
      slide_speed: 5.0,
      wait_climb_timer: 0.15,
      climb_reach: 0.8,
      climb_speed: 3.5,
    }
  }
}

#[derive(Resource)]
pub struct ConfigHandle(pub Handle<GameConfig>);

#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigLoaded {
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub player: PlayerConfig,
}

impl From<GameConfig> for ConfigLoaded {
  fn from(config: GameConfig) -> Self {
    Self {
      window: config.window,
      camera: config.camera,
      player: config.player,
    }
  }
}
