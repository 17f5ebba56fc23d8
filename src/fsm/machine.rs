use std::collections::{HashMap, HashSet};

use bevy::log::{debug, info, warn};

use super::state::{CharacterState, StateArgs, StateContext, StateId};
use super::FsmError;

/// How a switch request was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
  /// The target state was entered.
  Entered,
  /// Strict mode rejected the transition; nothing changed.
  Denied,
  /// A request queued during `exit` won; this switch never entered its
  /// target.
  Superseded,
  /// The machine is disposed; the request was ignored.
  Inert,
}

/// Owns the registered states, tracks the current one and performs validated
/// switches. At most one state is current at any instant.
///
/// Authorized edges live here as an adjacency map rather than inside the
/// states: a state declares intent through `transitions()` and the machine
/// materializes edges from that declaration the first time strict mode would
/// otherwise deny a switch.
pub struct StateMachine {
  states: HashMap<StateId, Box<dyn CharacterState>>,
  authorized: HashMap<StateId, HashSet<StateId>>,
  current: Option<StateId>,
  strict: bool,
  switch_count: u64,
  disposed: bool,
}

impl std::fmt::Debug for StateMachine {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StateMachine")
      .field("states", &self.states.keys().collect::<Vec<_>>())
      .field("authorized", &self.authorized)
      .field("current", &self.current)
      .field("strict", &self.strict)
      .field("switch_count", &self.switch_count)
      .field("disposed", &self.disposed)
      .finish()
  }
}

impl Default for StateMachine {
  fn default() -> Self {
    Self::new()
  }
}

impl StateMachine {
  pub fn new() -> Self {
    Self {
      states: HashMap::new(),
      authorized: HashMap::new(),
      current: None,
      strict: false,
      switch_count: 0,
      disposed: false,
    }
  }

  pub fn current(&self) -> Option<StateId> {
    self.current
  }

  pub fn is_disposed(&self) -> bool {
    self.disposed
  }

  /// Require an authorized edge before a switch is permitted. Off by default.
  pub fn set_strict(&mut self, strict: bool) -> &mut Self {
    self.strict = strict;
    self
  }

  /// Register a state under its kind. Each kind may be registered once.
  pub fn add(&mut self, state: Box<dyn CharacterState>) -> Result<&mut Self, FsmError> {
    let id = state.id();
    if self.states.contains_key(&id) {
      return Err(FsmError::DuplicateState(id));
    }
    self.states.insert(id, state);
    Ok(self)
  }

  /// Authorize the edge `from -> to`. Both kinds must already be registered.
  pub fn add_transition(&mut self, from: StateId, to: StateId) -> Result<&mut Self, FsmError> {
    if !self.states.contains_key(&from) {
      return Err(FsmError::StateNotFound(from));
    }
    if !self.states.contains_key(&to) {
      return Err(FsmError::StateNotFound(to));
    }
    self.authorize(from, to)?;
    Ok(self)
  }

  /// Authorize an edge between two state instances, registering either side
  /// first if its kind is not present yet.
  pub fn add_linked(
    &mut self,
    from: Box<dyn CharacterState>,
    to: Box<dyn CharacterState>,
  ) -> Result<&mut Self, FsmError> {
    let from_id = from.id();
    let to_id = to.id();
    if !self.states.contains_key(&from_id) {
      self.states.insert(from_id, from);
    }
    if !self.states.contains_key(&to_id) {
      self.states.insert(to_id, to);
    }
    self.authorize(from_id, to_id)?;
    Ok(self)
  }

  /// Whether the edge `from -> to` has been authorized. Pure query.
  pub fn has_transition(&self, from: StateId, to: StateId) -> bool {
    self
      .authorized
      .get(&from)
      .is_some_and(|targets| targets.contains(&to))
  }

  /// Run the current state for this tick, then apply any switch it requested.
  pub fn service(&mut self, ctx: &mut StateContext) {
    let Some(current) = self.current else {
      return;
    };
    if let Some(state) = self.states.get_mut(&current) {
      state.service(ctx);
    }
    self.drain_requests(ctx, None);
  }

  /// Switch to `target`, running `exit` on the current state before `enter`
  /// on the target. In strict mode an unauthorized switch first attempts lazy
  /// resolution from the current state's declared transitions and is denied
  /// if that still yields no edge.
  pub fn switch_state(
    &mut self,
    ctx: &mut StateContext,
    target: StateId,
    args: StateArgs,
  ) -> Result<SwitchOutcome, FsmError> {
    self.switch_internal(ctx, target, args, None)
  }

  /// Mark the machine inert and exit the current state. Further switch
  /// requests are ignored.
  pub fn dispose(&mut self, ctx: &mut StateContext) {
    self.disposed = true;
    if let Some(current) = self.current.take() {
      info!("disposing state machine while in {current}");
      if let Some(state) = self.states.get_mut(&current) {
        state.exit(ctx, None, &StateArgs::new());
      }
      ctx.clear_requests();
    }
  }

  /// Exit the current state and forget every registration. Teardown only.
  pub fn clear_states(&mut self, ctx: &mut StateContext) {
    if let Some(current) = self.current.take() {
      if let Some(state) = self.states.get_mut(&current) {
        state.exit(ctx, None, &StateArgs::new());
      }
      ctx.clear_requests();
    }
    self.states.clear();
    self.authorized.clear();
  }

  fn authorize(&mut self, from: StateId, to: StateId) -> Result<(), FsmError> {
    if !self.authorized.entry(from).or_default().insert(to) {
      return Err(FsmError::DuplicateTransition(from, to));
    }
    Ok(())
  }

  /// Materialize edges for every registered kind in `from`'s declared
  /// transition set that is not authorized yet.
  fn resolve_declared_transitions(&mut self, from: StateId) {
    let Some(state) = self.states.get(&from) else {
      return;
    };
    let declared = state.transitions();
    if declared.is_empty() {
      warn!("state {from} declares no transitions");
      return;
    }
    for &to in declared {
      if !self.states.contains_key(&to) || self.has_transition(from, to) {
        continue;
      }
      self.authorized.entry(from).or_default().insert(to);
    }
  }

  /// `ghost_prev` carries the state that just exited while a request queued
  /// during that exit is being resolved; it stands in for the (already
  /// cleared) current state for strict checks and as `previous` for `enter`.
  fn switch_internal(
    &mut self,
    ctx: &mut StateContext,
    target: StateId,
    args: StateArgs,
    ghost_prev: Option<StateId>,
  ) -> Result<SwitchOutcome, FsmError> {
    if self.disposed {
      return Ok(SwitchOutcome::Inert);
    }
    if !self.states.contains_key(&target) {
      return Err(FsmError::StateNotFound(target));
    }

    let gate = self.current.or(ghost_prev);
    if self.strict {
      if let Some(from) = gate {
        if !self.has_transition(from, target) {
          self.resolve_declared_transitions(from);
          if !self.has_transition(from, target) {
            warn!("transition from {from} to {target} is not allowed");
            return Ok(SwitchOutcome::Denied);
          }
        }
      }
    }

    self.switch_count += 1;
    let generation = self.switch_count;

    let previous = self.current.take();
    if let Some(prev) = previous {
      if let Some(state) = self.states.get_mut(&prev) {
        state.exit(ctx, Some(target), &args);
      }
      // Requests queued during exit run now and bump the generation, which
      // supersedes this switch.
      self.drain_requests(ctx, Some(prev));
    }

    if self.switch_count != generation {
      debug!("switch to {target} superseded by a request made during exit");
      return Ok(SwitchOutcome::Superseded);
    }

    self.current = Some(target);
    if let Some(state) = self.states.get_mut(&target) {
      state.enter(ctx, previous.or(ghost_prev), &args);
    }
    self.drain_requests(ctx, None);
    Ok(SwitchOutcome::Entered)
  }

  fn drain_requests(&mut self, ctx: &mut StateContext, ghost_prev: Option<StateId>) {
    while let Some((target, args)) = ctx.pop_request() {
      if let Err(err) = self.switch_internal(ctx, target, args, ghost_prev) {
        warn!("queued switch failed: {err}");
      }
    }
  }
}
