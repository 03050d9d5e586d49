//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{Event, SharedListener, State};
use crate::engine::{FsmError, StateMachine};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

enum Registration<S, E> {
    Transition { from: S, on: E, to: S },
    Circular { state: S, on: E },
}

/// Builder for constructing state machines with a fluent API.
///
/// Registrations are applied in the order they were added, so a later entry
/// for the same `(state, event)` pair wins. Unlike calling
/// [`StateMachine::add_transition`] directly, every invalid registration is
/// reported at once by [`build`](Self::build).
pub struct StateMachineBuilder<S: State, E: Event> {
    error_state: S,
    initial: Option<S>,
    registrations: Vec<Registration<S, E>>,
    listeners: Vec<SharedListener<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a builder for a machine that falls back to `error_state`.
    pub fn new(error_state: S) -> Self {
        Self {
            error_state,
            initial: None,
            registrations: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Start the built machine in `state` (optional).
    pub fn start(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add `from --on--> to`.
    pub fn transition(mut self, from: S, on: E, to: S) -> Self {
        self.registrations
            .push(Registration::Transition { from, on, to });
        self
    }

    /// Add a transition that stays in `state` on `on`.
    pub fn circular(mut self, state: S, on: E) -> Self {
        self.registrations.push(Registration::Circular { state, on });
        self
    }

    /// Add several `(from, on, to)` transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, E, S)>,
    {
        self.registrations.extend(
            transitions
                .into_iter()
                .map(|(from, on, to)| Registration::Transition { from, on, to }),
        );
        self
    }

    /// Register a listener on the built machine.
    pub fn listener(mut self, listener: SharedListener<S, E>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Build the state machine.
    ///
    /// Returns an error if no transitions were added or if any registration
    /// was a self-loop outside [`circular`](Self::circular).
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        if self.registrations.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine = StateMachine::new(self.error_state);

        let checks: Vec<Validation<(), NonEmptyVec<FsmError>>> = self
            .registrations
            .into_iter()
            .map(|registration| match registration {
                Registration::Transition { from, on, to } => {
                    match machine.add_transition(from, on, to) {
                        Ok(()) => Validation::success(()),
                        Err(err) => Validation::fail(err),
                    }
                }
                Registration::Circular { state, on } => {
                    machine.add_circular_transition(state, on);
                    Validation::success(())
                }
            })
            .collect();

        if let Validation::Failure(errors) = Validation::all_vec(checks) {
            return Err(BuildError::InvalidTransitions(
                errors.iter().cloned().collect(),
            ));
        }

        for listener in self.listeners {
            machine.add_listener(listener);
        }
        if let Some(initial) = self.initial {
            machine.start(initial);
        }

        Ok(machine)
    }
}
