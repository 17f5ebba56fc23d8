use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

#[derive(Component)]
pub struct PlayerInput;

#[derive(Debug, InputAction)]
#[action_output(Vec2)]
pub struct Move;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Sprint;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Jump;

/// Hold to stay in the aiming state.
#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Aim;

#[derive(Debug, InputAction)]
#[action_output(bool)]
pub struct Fire;
