//! E2E test for the character drive loop against a live rapier world.
//!
//! Spawns the real player bundle over a ground slab and steps the app with a
//! manual clock so every update is exactly one fixed tick.
//!
//! Run: cargo test --test character_e2e

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier3d::prelude::*;
use kinema::config::ConfigLoaded;
use kinema::core::CameraBasis;
use kinema::fsm::StateId;
use kinema::input::InputSnapshot;
use kinema::physics::rapier::ground_collision_groups;
use kinema::player::drive::drive_character;
use kinema::player::{standard_state_machine, AnimationFlags, BodyState, CharacterBrain, Player};

const DELTA_TIME: f64 = 1.0 / 60.0;

struct TestHarness {
  app: App,
  player: Entity,
}

impl TestHarness {
  fn new() -> Self {
    let mut app = App::new();
    app
      .add_plugins(MinimalPlugins)
      .add_plugins(bevy::transform::TransformPlugin)
      .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
      .insert_resource(Time::<Fixed>::from_hz(60.0))
      .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
        DELTA_TIME,
      )))
      .init_resource::<InputSnapshot>()
      .init_resource::<ConfigLoaded>()
      .init_resource::<CameraBasis>()
      .add_systems(
        FixedUpdate,
        drive_character.before(PhysicsSet::SyncBackend),
      );

    // Ground slab, top face at y = 0.
    app.world_mut().spawn((
      Transform::from_xyz(0.0, -0.5, 0.0),
      RigidBody::Fixed,
      Collider::cuboid(25.0, 0.5, 25.0),
      ground_collision_groups(),
    ));

    let config = ConfigLoaded::default();
    let player_config = &config.player;
    let half_height =
      (player_config.collider_height / 2.0 - player_config.collider_radius).max(0.0);
    let machine = standard_state_machine().unwrap();

    let player = app
      .world_mut()
      .spawn((
        Player,
        CharacterBrain::new(machine),
        BodyState::default(),
        AnimationFlags::default(),
        Transform::from_xyz(0.0, 2.0, 0.0),
        RigidBody::KinematicPositionBased,
        Collider::capsule_y(half_height, player_config.collider_radius),
        KinematicCharacterController {
          snap_to_ground: Some(CharacterLength::Absolute(0.2)),
          ..default()
        },
      ))
      .id();

    // First update initializes rapier.
    app.update();

    Self { app, player }
  }

  fn run(&mut self, ticks: usize) {
    for _ in 0..ticks {
      self.app.update();
    }
  }

  fn set_input(&mut self, update: impl FnOnce(&mut InputSnapshot)) {
    let mut input = self.app.world_mut().resource_mut::<InputSnapshot>();
    update(&mut input);
  }

  fn translation(&self) -> Vec3 {
    self
      .app
      .world()
      .get::<Transform>(self.player)
      .unwrap()
      .translation
  }

  fn current_state(&self) -> Option<StateId> {
    self
      .app
      .world()
      .get::<CharacterBrain>(self.player)
      .unwrap()
      .machine
      .current()
  }
}

#[test]
fn character_falls_and_settles_on_the_ground() {
  let mut harness = TestHarness::new();

  let initial_y = harness.translation().y;
  harness.run(300);
  let settled_y = harness.translation().y;

  assert!(
    settled_y < initial_y - 0.5,
    "character should fall from {initial_y} but is at {settled_y}"
  );
  assert!(
    settled_y > 0.0,
    "character sank through the ground: y = {settled_y}"
  );

  // Settled: another stretch of ticks barely moves it.
  harness.run(120);
  let later_y = harness.translation().y;
  assert!(
    (later_y - settled_y).abs() < 0.05,
    "character still moving after settling: {settled_y} -> {later_y}"
  );
}

#[test]
fn forward_input_walks_the_character_along_the_camera_forward() {
  let mut harness = TestHarness::new();
  harness.run(120);
  let start = harness.translation();

  // Default camera basis looks down negative Z.
  harness.set_input(|input| input.move_axis = Vec2::new(0.0, 1.0));
  harness.run(120);
  let end = harness.translation();

  assert!(
    end.z < start.z - 1.0,
    "character should walk forward: z {} -> {}",
    start.z,
    end.z
  );
  assert!(
    end.x.abs() < 0.1,
    "walk should stay on the forward axis: x = {}",
    end.x
  );
}

#[test]
fn aim_toggles_between_movement_and_shoot() {
  let mut harness = TestHarness::new();
  harness.run(10);
  assert_eq!(harness.current_state(), Some(StateId::Movement));

  harness.set_input(|input| input.aim = true);
  harness.run(2);
  assert_eq!(harness.current_state(), Some(StateId::Shoot));

  harness.set_input(|input| input.aim = false);
  harness.run(2);
  assert_eq!(harness.current_state(), Some(StateId::Movement));
}

#[test]
fn jump_lifts_the_character_off_the_ground() {
  let mut harness = TestHarness::new();
  harness.run(300);
  let grounded_y = harness.translation().y;

  harness.set_input(|input| input.jump = true);
  harness.run(1);
  harness.set_input(|input| input.jump = false);
  harness.run(20);

  let airborne_y = harness.translation().y;
  assert!(
    airborne_y > grounded_y + 0.2,
    "character should rise after a jump: {grounded_y} -> {airborne_y}"
  );

  // Gravity brings it back down.
  harness.run(300);
  let landed_y = harness.translation().y;
  assert!(
    (landed_y - grounded_y).abs() < 0.1,
    "character should land back at rest height: {grounded_y} vs {landed_y}"
  );
}
