//! Finite state machine driving the character.
//!
//! States are registered once per kind into a [`StateMachine`], which owns
//! them, validates transitions and runs the enter/service/exit lifecycle.
//! Hooks never call back into the machine; they queue switch requests on the
//! [`StateContext`] and the machine drains the queue after each hook, so a
//! request made during `exit` can supersede the switch that triggered it.

mod machine;
mod state;


use thiserror::Error;

pub use machine::{StateMachine, SwitchOutcome};
pub use state::{CharacterState, StateArg, StateArgs, StateContext, StateId};

/// Wiring mistakes caught while assembling or driving a machine. These are
/// fatal at setup time; none of them leave the machine partially mutated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsmError {
  #[error("state {0} is already registered")]
  DuplicateState(StateId),
  #[error("state {0} already has a transition to {1}")]
  DuplicateTransition(StateId, StateId),
  #[error("state {0} is not registered")]
  StateNotFound(StateId),
}
