use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::{CastHit, CharacterPhysics, MAX_CAST_HITS, RayHit};

/// Collision group for walkable scenery. Slope probes only consider members
/// of this group, so dynamic props never register as ground.
pub const GROUND_GROUP: Group = Group::GROUP_1;

/// Bundle-friendly groups for scenery colliders.
pub fn ground_collision_groups() -> CollisionGroups {
  CollisionGroups::new(GROUND_GROUP, Group::ALL)
}

/// Adapter from the rapier query pipeline to [`CharacterPhysics`]. Lives for
/// one drive tick; sweep requests accumulate and are handed to the kinematic
/// character controller afterwards.
pub struct RapierCharacterPhysics<'a, 'b> {
  context: &'a RapierContext<'b>,
  exclude: Entity,
  pending: Vec3,
}

impl<'a, 'b> RapierCharacterPhysics<'a, 'b> {
  pub fn new(context: &'a RapierContext<'b>, exclude: Entity) -> Self {
    Self {
      context,
      exclude,
      pending: Vec3::ZERO,
    }
  }

  /// The accumulated sweep displacement for this tick.
  pub fn take_translation(&mut self) -> Vec3 {
    std::mem::take(&mut self.pending)
  }
}

impl CharacterPhysics for RapierCharacterPhysics<'_, '_> {
  fn sweep_move(&mut self, displacement: Vec3) {
    self.pending += displacement;
  }

  fn sphere_cast_all(
    &mut self,
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    max_distance: f32,
    hits: &mut [CastHit; MAX_CAST_HITS],
  ) -> usize {
    let shape = Collider::ball(radius);
    let options = ShapeCastOptions {
      max_time_of_impact: max_distance,
      target_distance: 0.0,
      stop_at_penetration: true,
      compute_impact_geometry_on_penetration: true,
    };

    // Rapier reports only the earliest hit per cast, so re-cast while
    // excluding colliders already seen until the buffer fills or the sweep
    // comes up empty.
    let mut seen: Vec<Entity> = Vec::with_capacity(MAX_CAST_HITS);
    let mut count = 0;
    while count < MAX_CAST_HITS {
      let predicate = |entity: Entity| !seen.contains(&entity);
      let filter = QueryFilter::default()
        .exclude_collider(self.exclude)
        .predicate(&predicate);

      let Some((entity, hit)) =
        self
          .context
          .cast_shape(
            origin,
            Quat::IDENTITY,
            direction,
            shape.raw.as_ref(),
            options,
            filter,
          )
      else {
        break;
      };

      let (point, normal) = hit
        .details
        .map(|details| (details.witness1, details.normal1))
        .unwrap_or((origin + direction * hit.time_of_impact, Vec3::Y));
      hits[count] = CastHit { point, normal };
      count += 1;
      seen.push(entity);
    }
    count
  }

  fn ray_cast(
    &mut self,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
    ground_only: bool,
  ) -> Option<RayHit> {
    let mut filter = QueryFilter::default().exclude_collider(self.exclude);
    if ground_only {
      filter = filter.groups(CollisionGroups::new(Group::ALL, GROUND_GROUP));
    }

    self
      .context
      .cast_ray_and_get_normal(origin, direction, max_distance, true, filter)
      .map(|(_, intersection)| RayHit {
        point: intersection.point,
        normal: intersection.normal,
      })
  }
}
