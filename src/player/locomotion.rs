//! Grounding, gravity and slope handling shared by the concrete states.

use bevy::prelude::*;

use crate::config::PlayerConfig;
use crate::physics::{CastHit, CharacterPhysics, MAX_CAST_HITS};

/// Downward bias applied while grounded so the controller stays seated on the
/// ground instead of oscillating at exactly zero.
pub const GROUNDED_FALL_BIAS: f32 = -2.0;

const GROUND_PROBE_DISTANCE: f32 = 0.1;
const SLOPE_PROBE_DISTANCE: f32 = 1.5;
/// A contact counts as ground when the hit-to-origin vector leans more than
/// this many degrees out of the horizontal plane.
const GROUND_CONTACT_MIN_ANGLE: f32 = 45.0;
const SLIDE_RAMP_TIME: f32 = 0.3;
const SLIDE_SETTLE_TIME: f32 = 0.5;

/// Capsule dimensions of the character controller, used to derive the ground
/// probe origin.
#[derive(Debug, Clone, Copy)]
pub struct ControllerShape {
  pub center: Vec3,
  pub height: f32,
  pub radius: f32,
}

impl ControllerShape {
  /// The sphere-cast origin: the center of the capsule's bottom cap.
  pub fn probe_origin(&self, translation: Vec3) -> Vec3 {
    translation + self.center + Vec3::NEG_Y * (self.height / 2.0 - self.radius)
  }
}

pub fn controller_shape(config: &PlayerConfig) -> ControllerShape {
  ControllerShape {
    center: Vec3::ZERO,
    height: config.collider_height,
    radius: config.collider_radius,
  }
}

/// Per-state frame data. Each concrete state owns its own copy and resets it
/// on enter.
#[derive(Debug, Clone)]
pub struct Locomotion {
  pub vertical_velocity: f32,
  pub ground_normal: Vec3,
  pub slide_velocity: Vec3,
  slide_damp_velocity: Vec3,
  pub grounded: bool,
}

impl Default for Locomotion {
  fn default() -> Self {
    Self {
      vertical_velocity: 0.0,
      ground_normal: Vec3::Y,
      slide_velocity: Vec3::ZERO,
      slide_damp_velocity: Vec3::ZERO,
      grounded: false,
    }
  }
}

impl Locomotion {
  pub fn reset(&mut self) {
    *self = Self::default();
  }

  /// One tick of the shared algorithm: probe the ground, integrate gravity,
  /// update the slope slide, then issue a single sweep-move combining the
  /// vertical velocity with whatever horizontal step the state computed.
  ///
  /// `jump_velocity` is consumed only while grounded; it replaces the
  /// grounded bias for this tick and unsets the grounded flag so the impulse
  /// is not cancelled on the next probe.
  pub fn apply_gravity(
    &mut self,
    translation: Vec3,
    shape: &ControllerShape,
    physics: &mut dyn CharacterPhysics,
    config: &PlayerConfig,
    horizontal: Vec3,
    jump_velocity: Option<f32>,
    dt: f32,
  ) {
    self.grounded = ground_contact(translation, shape, physics);
    match jump_velocity {
      Some(velocity) if self.grounded => {
        self.grounded = false;
        self.vertical_velocity = velocity;
      }
      // The probe still sees the floor just after launch; pinning a rising
      // velocity back to the bias would swallow the jump.
      _ if self.grounded && self.vertical_velocity <= 0.0 => {
        self.vertical_velocity = GROUNDED_FALL_BIAS;
      }
      _ => self.vertical_velocity += config.gravity * dt,
    }

    self.update_slope_slide(translation, physics, config, dt);
    physics.sweep_move((horizontal + Vec3::Y * self.vertical_velocity) * dt);
  }

  /// Ray straight down for a ground normal, then damp the slide velocity
  /// toward the downhill direction on steep slopes and toward zero otherwise.
  /// The slide velocity is published for observers; it is not folded into the
  /// sweep displacement.
  pub(crate) fn update_slope_slide(
    &mut self,
    translation: Vec3,
    physics: &mut dyn CharacterPhysics,
    config: &PlayerConfig,
    dt: f32,
  ) {
    self.ground_normal = physics
      .ray_cast(translation, Vec3::NEG_Y, SLOPE_PROBE_DISTANCE, true)
      .map(|hit| hit.normal)
      .unwrap_or(Vec3::Y);

    let slope_angle = angle_between_degrees(self.ground_normal, Vec3::Y);
    let (target, smooth_time) = if slope_angle > config.slope_limit_angle {
      let downhill = Vec3::NEG_Y.reject_from(self.ground_normal).normalize_or_zero();
      (downhill * config.slide_speed, SLIDE_RAMP_TIME)
    } else {
      (Vec3::ZERO, SLIDE_SETTLE_TIME)
    };

    self.slide_velocity = smooth_damp(
      self.slide_velocity,
      target,
      &mut self.slide_damp_velocity,
      smooth_time,
      dt,
    );
  }
}

/// Sphere-cast below the capsule and classify the contacts. A single contact
/// counts as ground when it lies steeply below the probe origin; otherwise
/// more than one contact of any kind is taken as ground (edge and corner
/// contact reports shallow hits on both sides).
pub fn ground_contact(
  translation: Vec3,
  shape: &ControllerShape,
  physics: &mut dyn CharacterPhysics,
) -> bool {
  let origin = shape.probe_origin(translation);
  let mut hits = [CastHit::default(); MAX_CAST_HITS];
  let count = physics.sphere_cast_all(
    origin,
    shape.radius,
    Vec3::NEG_Y,
    GROUND_PROBE_DISTANCE,
    &mut hits,
  );

  for hit in &hits[..count] {
    let contact = hit.point - origin;
    let flat = Vec3::new(contact.x, 0.0, contact.z);
    // A contact with no horizontal part sits dead below the probe; that is
    // the steepest case, not a degenerate one.
    if flat.length_squared() < 1e-8 {
      if contact.y < 0.0 {
        return true;
      }
      continue;
    }
    if angle_between_degrees(contact, flat) < GROUND_CONTACT_MIN_ANGLE {
      continue;
    }
    return true;
  }
  count > 1
}

/// Angle in degrees, treating near-zero vectors as parallel.
fn angle_between_degrees(a: Vec3, b: Vec3) -> f32 {
  let denominator = (a.length_squared() * b.length_squared()).sqrt();
  if denominator < 1e-8 {
    return 0.0;
  }
  let cos = (a.dot(b) / denominator).clamp(-1.0, 1.0);
  cos.acos().to_degrees()
}

/// Critically-damped spring toward `target`; `velocity` is the damper's own
/// state and must persist between calls.
fn smooth_damp(current: Vec3, target: Vec3, velocity: &mut Vec3, smooth_time: f32, dt: f32) -> Vec3 {
  let smooth_time = smooth_time.max(1e-4);
  let omega = 2.0 / smooth_time;
  let x = omega * dt;
  let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

  let change = current - target;
  let temp = (*velocity + change * omega) * dt;
  *velocity = (*velocity - temp * omega) * exp;
  let mut output = target + (change + temp) * exp;

  // Clamp overshoot past the target.
  if (target - current).dot(output - target) > 0.0 {
    output = target;
    *velocity = Vec3::ZERO;
  }
  output
}
