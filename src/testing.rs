//! Shared fixtures: a scripted physics double and a context harness so state
//! tests can run without a rapier world.

use bevy::prelude::*;

use crate::config::PlayerConfig;
use crate::core::camera::CameraBasis;
use crate::fsm::StateContext;
use crate::input::InputSnapshot;
use crate::physics::{CastHit, CharacterPhysics, RayHit, MAX_CAST_HITS};
use crate::player::components::BodyFrame;
use crate::player::view::AnimationFlags;

pub const TEST_DT: f32 = 1.0 / 60.0;

/// Physics double that replays scripted hits and records every sweep request.
#[derive(Default)]
pub struct ScriptedPhysics {
  pub hits: Vec<CastHit>,
  pub ray: Option<RayHit>,
  pub sweeps: Vec<Vec3>,
}

impl ScriptedPhysics {
  pub fn with_hits(hits: Vec<CastHit>) -> Self {
    Self {
      hits,
      ..Default::default()
    }
  }

  pub fn with_ray(normal: Vec3) -> Self {
    Self {
      ray: Some(RayHit {
        point: Vec3::ZERO,
        normal,
      }),
      ..Default::default()
    }
  }

  pub fn total_sweep(&self) -> Vec3 {
    self.sweeps.iter().copied().sum()
  }
}

impl CharacterPhysics for ScriptedPhysics {
  fn sweep_move(&mut self, displacement: Vec3) {
    self.sweeps.push(displacement);
  }

  fn sphere_cast_all(
    &mut self,
    _origin: Vec3,
    _radius: f32,
    _direction: Vec3,
    _max_distance: f32,
    hits: &mut [CastHit; MAX_CAST_HITS],
  ) -> usize {
    let count = self.hits.len().min(MAX_CAST_HITS);
    hits[..count].copy_from_slice(&self.hits[..count]);
    count
  }

  fn ray_cast(
    &mut self,
    _origin: Vec3,
    _direction: Vec3,
    _max_distance: f32,
    _ground_only: bool,
  ) -> Option<RayHit> {
    self.ray
  }
}

/// Owns every collaborator a [`StateContext`] borrows, so tests can build a
/// context in one line and inspect the pieces afterwards.
pub struct Harness {
  pub input: InputSnapshot,
  pub config: PlayerConfig,
  pub camera: CameraBasis,
  pub body: BodyFrame,
  pub physics: ScriptedPhysics,
  pub anim: AnimationFlags,
}

impl Default for Harness {
  fn default() -> Self {
    Self {
      input: InputSnapshot::default(),
      config: PlayerConfig::default(),
      camera: CameraBasis::default(),
      body: BodyFrame::default(),
      physics: ScriptedPhysics::default(),
      anim: AnimationFlags::default(),
    }
  }
}

impl Harness {
  pub fn ctx(&mut self) -> StateContext<'_> {
    StateContext::new(
      TEST_DT,
      &self.input,
      &self.config,
      &self.camera,
      &mut self.body,
      &mut self.physics,
      &mut self.anim,
    )
  }
}
