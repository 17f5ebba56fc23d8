use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
  fn build(&self, app: &mut App) {
    // Locomotion is tuned for a fixed 60 Hz step, so physics runs in the
    // fixed schedule alongside the drive system.
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule());
  }
}
