use std::collections::VecDeque;
use std::fmt;

use crate::config::PlayerConfig;
use crate::core::camera::CameraBasis;
use crate::input::InputSnapshot;
use crate::physics::CharacterPhysics;
use crate::player::components::BodyFrame;
use crate::player::view::AnimationView;

/// Discriminator for the concrete states. One instance per kind is registered
/// into a machine; transition tables are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
  Movement,
  Climb,
  Shoot,
}

impl fmt::Display for StateId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StateId::Movement => write!(f, "movement"),
      StateId::Climb => write!(f, "climb"),
      StateId::Shoot => write!(f, "shoot"),
    }
  }
}

/// Positional arguments carried by a switch request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateArg {
  Point(bevy::math::Vec3),
  Direction(bevy::math::Vec3),
}

pub type StateArgs = Vec<StateArg>;

/// One state of the character.
///
/// `transitions` is the declared set of legal successors; it must not change
/// while the state is active. Authorization is materialized lazily from it by
/// the machine in strict mode.
pub trait CharacterState: Send + Sync {
  fn id(&self) -> StateId;

  fn transitions(&self) -> &'static [StateId];

  fn enter(&mut self, _ctx: &mut StateContext, _previous: Option<StateId>, _args: &StateArgs) {}

  fn service(&mut self, _ctx: &mut StateContext) {}

  fn exit(&mut self, _ctx: &mut StateContext, _next: Option<StateId>, _args: &StateArgs) {}
}

/// Everything a state may touch during one tick: the sampled input, the
/// tunables, the camera basis, the body pose, and the physics and animation
/// collaborators. Built fresh by the drive system each tick.
pub struct StateContext<'a> {
  pub dt: f32,
  pub input: &'a InputSnapshot,
  pub config: &'a PlayerConfig,
  pub camera: &'a CameraBasis,
  pub body: &'a mut BodyFrame,
  pub physics: &'a mut dyn CharacterPhysics,
  pub anim: &'a mut dyn AnimationView,
  requests: VecDeque<(StateId, StateArgs)>,
}

impl<'a> StateContext<'a> {
  pub fn new(
    dt: f32,
    input: &'a InputSnapshot,
    config: &'a PlayerConfig,
    camera: &'a CameraBasis,
    body: &'a mut BodyFrame,
    physics: &'a mut dyn CharacterPhysics,
    anim: &'a mut dyn AnimationView,
  ) -> Self {
    Self {
      dt,
      input,
      config,
      camera,
      body,
      physics,
      anim,
      requests: VecDeque::new(),
    }
  }

  /// Request a switch to `target`. Processed by the machine after the current
  /// hook returns; a request made during `exit` supersedes the in-flight
  /// switch.
  pub fn switch_to(&mut self, target: StateId) {
    self.switch_with(target, StateArgs::new());
  }

  pub fn switch_with(&mut self, target: StateId, args: StateArgs) {
    self.requests.push_back((target, args));
  }

  pub(crate) fn pop_request(&mut self) -> Option<(StateId, StateArgs)> {
    self.requests.pop_front()
  }

  pub(crate) fn clear_requests(&mut self) {
    self.requests.clear();
  }
}
