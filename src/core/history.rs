//! State transition history tracking.
//!
//! Provides an ordered record of accepted transitions and a ready-made
//! listener that fills it in as the engine runs.

use super::listener::StateChangeListener;
use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use turnstile::core::StateTransition;
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Gate { Locked, Unlocked }
///
/// let transition = StateTransition {
///     from: Gate::Locked,
///     event: "coin",
///     to: Gate::Unlocked,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, Gate::Unlocked);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S, E> {
    /// The state being transitioned from
    pub from: S,
    /// The event that caused the transition
    pub event: E,
    /// The state being transitioned to
    pub to: S,
    /// When the transition was accepted
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions.
///
/// History is immutable from the outside: [`record`](Self::record) returns a
/// new history with the transition appended.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: "start",
///     event: 'a',
///     to: "middle",
///     timestamp: Utc::now(),
/// });
/// let history = history.record(StateTransition {
///     from: "middle",
///     event: 'b',
///     to: "end",
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&"start", &"middle", &"end"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateHistory<S, E> {
    transitions: Vec<StateTransition<S, E>>,
}

impl<S, E> Default for StateHistory<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> StateHistory<S, E> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S, E>) -> Self
    where
        S: Clone,
        E: Clone,
    {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    pub(crate) fn push(&mut self, transition: StateTransition<S, E>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition, then the `to` state
    /// of each transition. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S, E>] {
        &self.transitions
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S, E>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

/// Listener that records every accepted transition.
///
/// Register it on a machine (wrapped in an `Arc`) and read the accumulated
/// history back with [`snapshot`](Self::snapshot).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use turnstile::core::HistoryRecorder;
/// use turnstile::engine::StateMachine;
///
/// let recorder = Arc::new(HistoryRecorder::<&str, &str>::new());
/// let mut machine = StateMachine::new("error");
/// machine.add_transition("locked", "coin", "unlocked").unwrap();
/// machine.add_listener(recorder.clone());
/// machine.start("locked");
/// machine.process("coin").unwrap();
///
/// assert_eq!(recorder.snapshot().get_path(), vec![&"locked", &"unlocked"]);
/// ```
#[derive(Debug)]
pub struct HistoryRecorder<S, E> {
    history: Mutex<StateHistory<S, E>>,
}

impl<S, E> Default for HistoryRecorder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, E> HistoryRecorder<S, E> {
    pub fn new() -> Self {
        Self {
            history: Mutex::new(StateHistory::new()),
        }
    }

    /// Copy of the history recorded so far.
    pub fn snapshot(&self) -> StateHistory<S, E>
    where
        S: Clone,
        E: Clone,
    {
        self.lock().clone()
    }

    /// Drop everything recorded so far.
    pub fn clear(&self) {
        *self.lock() = StateHistory::new();
    }

    // push is the only mutation, so a poisoned history is still consistent.
    fn lock(&self) -> MutexGuard<'_, StateHistory<S, E>> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S, E> StateChangeListener<S, E> for HistoryRecorder<S, E>
where
    S: State + Send,
    E: Event + Send,
{
    fn on_change(&self, old: &S, event: &E, new: &S) {
        self.lock().push(StateTransition {
            from: old.clone(),
            event: event.clone(),
            to: new.clone(),
            timestamp: Utc::now(),
        });
    }
}
