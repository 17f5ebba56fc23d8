mod climb;
mod movement;
mod shoot;

pub use climb::ClimbState;
pub use movement::MovementState;
pub use shoot::ShootState;
