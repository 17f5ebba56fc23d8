use bevy::prelude::*;

/// Fire-and-forget animation cues. The core never waits for the animation
/// layer; it flips cues and moves on.
pub trait AnimationView {
  fn start_idling(&mut self);
  fn start_walking(&mut self);
  fn stop_walking(&mut self);
  fn start_running(&mut self);
  fn stop_running(&mut self);
}

/// Animator parameters for the skeletal layer to pick up. Running wins over
/// walking: walk cues arriving while the run flag is set are ignored.
#[derive(Component, Debug, Clone, Default)]
pub struct AnimationFlags {
  pub idling: bool,
  pub walking: bool,
  pub running: bool,
}

impl AnimationFlags {
  fn reset_all(&mut self) {
    self.idling = false;
    self.walking = false;
    self.running = false;
  }
}

impl AnimationView for AnimationFlags {
  fn start_idling(&mut self) {
    self.reset_all();
    self.idling = true;
  }

  fn start_walking(&mut self) {
    if self.running {
      return;
    }
    self.idling = false;
    self.walking = true;
  }

  fn stop_walking(&mut self) {
    if self.running {
      return;
    }
    self.walking = false;
    self.start_idling();
  }

  fn start_running(&mut self) {
    self.idling = false;
    self.walking = false;
    self.running = true;
  }

  fn stop_running(&mut self) {
    self.running = false;
    if self.walking {
      return;
    }
    self.start_idling();
  }
}
