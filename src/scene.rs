//! Demo arena: flat ground, a slope past the slide limit and a climbable
//! ledge, all tagged as walkable scenery.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::physics::rapier::ground_collision_groups;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Startup, setup_scene);
  }
}

fn setup_scene(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
) {
  let ground_material = materials.add(Color::srgb(0.35, 0.45, 0.35));
  let rock_material = materials.add(Color::srgb(0.5, 0.5, 0.55));

  // Ground slab.
  commands.spawn((
    Transform::from_xyz(0.0, -0.5, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(25.0, 0.5, 25.0),
    ground_collision_groups(),
    Mesh3d(meshes.add(Cuboid::new(50.0, 1.0, 50.0))),
    MeshMaterial3d(ground_material.clone()),
  ));

  // A 40 degree ramp, past the slide limit.
  commands.spawn((
    Transform::from_xyz(8.0, 1.0, 0.0).with_rotation(Quat::from_rotation_z(40_f32.to_radians())),
    RigidBody::Fixed,
    Collider::cuboid(4.0, 0.25, 4.0),
    ground_collision_groups(),
    Mesh3d(meshes.add(Cuboid::new(8.0, 0.5, 8.0))),
    MeshMaterial3d(ground_material),
  ));

  // A chest-high block the character can climb.
  commands.spawn((
    Transform::from_xyz(-6.0, 0.75, 0.0),
    RigidBody::Fixed,
    Collider::cuboid(1.5, 0.75, 1.5),
    ground_collision_groups(),
    Mesh3d(meshes.add(Cuboid::new(3.0, 1.5, 3.0))),
    MeshMaterial3d(rock_material),
  ));

  commands.spawn((
    DirectionalLight {
      illuminance: 8_000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
  ));
}
