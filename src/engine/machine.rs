//! State machine that enforces a transition table and notifies listeners.

use crate::core::{Event, SharedListener, State};
use crate::engine::error::FsmError;
use crate::engine::table::TransitionTable;
use std::fmt;
use std::sync::Arc;

/// Synchronous finite-state machine.
///
/// The machine starts uninitialized. Call [`start`](Self::start) to place
/// the cursor, register rules with [`add_transition`](Self::add_transition),
/// then feed events to [`process`](Self::process). Every accepted event
/// updates the cursor and then notifies each listener with
/// `(old, event, new)`.
///
/// A rejected event is not a no-op: the cursor is moved to the default error
/// state given to [`new`](Self::new) *and* an error is returned. Later events
/// are evaluated against the error state.
///
/// The machine has no internal locking. Share it across threads behind a
/// single `Mutex`.
///
/// # Example
///
/// ```rust
/// use turnstile::engine::{FsmError, StateMachine};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Gate { Locked, Unlocked, Broken }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Input { Coin, Push }
///
/// let mut gate = StateMachine::new(Gate::Broken);
/// gate.add_transition(Gate::Locked, Input::Coin, Gate::Unlocked)?;
/// gate.add_transition(Gate::Unlocked, Input::Push, Gate::Locked)?;
/// gate.start(Gate::Locked);
///
/// gate.process(Input::Coin)?;
/// assert_eq!(gate.current_state(), Some(&Gate::Unlocked));
///
/// assert!(gate.process(Input::Coin).is_err());
/// assert_eq!(gate.current_state(), Some(&Gate::Broken));
/// # Ok::<(), FsmError>(())
/// ```
pub struct StateMachine<S: State, E: Event> {
    current: Option<S>,
    default_error_state: S,
    table: TransitionTable<S, E>,
    listeners: Vec<SharedListener<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create an uninitialized machine with an empty table.
    pub fn new(default_error_state: S) -> Self {
        Self {
            current: None,
            default_error_state,
            table: TransitionTable::new(),
            listeners: Vec::new(),
        }
    }

    /// Register `from --on--> to`.
    ///
    /// Fails with [`FsmError::SelfTransition`] when `from == to`; self-loops go
    /// through [`add_circular_transition`](Self::add_circular_transition).
    /// Registering an existing `(from, on)` pair replaces its destination.
    pub fn add_transition(&mut self, from: S, on: E, to: S) -> Result<(), FsmError> {
        if from == to {
            tracing::warn!(state = ?from, event = ?on, "refusing self-transition");
            return Err(FsmError::self_transition(&from, &on));
        }
        self.insert(from, on, to);
        Ok(())
    }

    /// Register a transition that stays in `state` on `on`.
    ///
    /// The event is still accepted and listeners still fire.
    pub fn add_circular_transition(&mut self, state: S, on: E) {
        self.insert(state.clone(), on, state);
    }

    fn insert(&mut self, from: S, on: E, to: S) {
        tracing::debug!(from = ?from, event = ?on, to = ?to, "registering transition");
        if let Some(replaced) = self.table.insert(from, on, to) {
            tracing::debug!(replaced = ?replaced, "transition destination overwritten");
        }
    }

    /// Place the cursor on `state`, replacing any current state.
    ///
    /// `state` does not need to appear in the table.
    pub fn start(&mut self, state: S) {
        tracing::debug!(state = ?state, "starting state machine");
        self.current = Some(state);
    }

    /// Whether `event` has a registered destination from `state` (pure).
    pub fn is_allowed(&self, state: &S, event: &E) -> bool {
        self.table.contains(state, event)
    }

    /// Destination for `event` from `state`, if one is registered (pure).
    pub fn destination(&self, state: &S, event: &E) -> Option<&S> {
        self.table.get(state, event)
    }

    /// Apply `event` to the current state.
    ///
    /// # Errors
    ///
    /// - [`FsmError::NotStarted`] if [`start`](Self::start) was never called.
    /// - [`FsmError::NoTransitions`] if the table is empty.
    /// - [`FsmError::InvalidTransition`] if `event` is not allowed from the
    ///   current state. The cursor has been moved to the default error state
    ///   when this is returned.
    ///
    /// The first two leave the machine untouched.
    pub fn process(&mut self, event: E) -> Result<(), FsmError> {
        let previous = self.current.clone().ok_or(FsmError::NotStarted)?;

        if self.table.is_empty() {
            return Err(FsmError::NoTransitions);
        }

        let Some(next) = self.table.get(&previous, &event).cloned() else {
            tracing::warn!(
                event = ?event,
                from = ?previous,
                error_state = ?self.default_error_state,
                "event not allowed, moving to error state"
            );
            self.current = Some(self.default_error_state.clone());
            return Err(FsmError::invalid_transition(&event, &previous));
        };

        tracing::debug!(from = ?previous, event = ?event, to = ?next, "transition accepted");
        self.current = Some(next.clone());
        self.notify(&previous, &event, &next);
        Ok(())
    }

    fn notify(&self, old: &S, event: &E, new: &S) {
        for listener in &self.listeners {
            listener.on_change(old, event, new);
        }
    }

    /// Current state, or `None` before [`start`](Self::start) (pure).
    pub fn current_state(&self) -> Option<&S> {
        self.current.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.current.is_some()
    }

    /// State the machine falls back to after a rejected event (pure).
    pub fn default_error_state(&self) -> &S {
        &self.default_error_state
    }

    /// Registered transitions (pure).
    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.table
    }

    /// Add a listener. Returns `false` if this exact handle is already
    /// registered, in which case nothing changes.
    pub fn add_listener(&mut self, listener: SharedListener<S, E>) -> bool {
        if self.listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return false;
        }
        self.listeners.push(listener);
        tracing::debug!(listeners = self.listeners.len(), "listener added");
        true
    }

    /// Remove a listener by handle identity. Returns `false` if it was not
    /// registered.
    pub fn remove_listener(&mut self, listener: &SharedListener<S, E>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
        before != self.listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<S: State, E: Event> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("default_error_state", &self.default_error_state)
            .field("table", &self.table)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
