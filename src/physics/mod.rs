pub mod rapier;

use bevy::prelude::*;

/// Upper bound on hits a single ground probe can report. Probes write into a
/// caller-owned array of this size, so a probe never allocates.
pub const MAX_CAST_HITS: usize = 16;

#[derive(Debug, Clone, Copy)]
pub struct CastHit {
  pub point: Vec3,
  pub normal: Vec3,
}

impl Default for CastHit {
  fn default() -> Self {
    Self {
      point: Vec3::ZERO,
      normal: Vec3::Y,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct RayHit {
  pub point: Vec3,
  pub normal: Vec3,
}

/// The physics engine as seen by the character states: synchronous queries
/// plus a collision-respecting move request. The character's own collider is
/// never reported back through these queries.
pub trait CharacterPhysics {
  /// Queue a displacement to be applied through the character controller
  /// this tick. Calls within one tick accumulate.
  fn sweep_move(&mut self, displacement: Vec3);

  /// Sweep a sphere and report every distinct collider struck, up to
  /// [`MAX_CAST_HITS`]. Returns the number of hits written.
  fn sphere_cast_all(
    &mut self,
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    max_distance: f32,
    hits: &mut [CastHit; MAX_CAST_HITS],
  ) -> usize;

  /// Cast a single ray. With `ground_only` the ray tests walkable scenery
  /// only; otherwise it tests everything but the character itself.
  fn ray_cast(
    &mut self,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    ground_only: bool,
  ) -> Option<RayHit>;
}
