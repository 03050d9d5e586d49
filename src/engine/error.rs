//! Errors raised by the transition engine.

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur when registering or processing transitions.
///
/// States and events are carried as their `Debug` rendering so the error
/// type does not depend on the machine's type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("Current state not set up via start()")]
    NotStarted,

    #[error("No transitions added via add_transition()")]
    NoTransitions,

    /// The event has no registered destination from `from`. By the time this
    /// is returned the machine has already moved to its error state.
    #[error("Event '{event}' cannot be applied to state '{from}'")]
    InvalidTransition { event: String, from: String },

    #[error(
        "Transition from '{state}' on '{event}' must change state; use add_circular_transition()"
    )]
    SelfTransition { state: String, event: String },
}

impl FsmError {
    pub(crate) fn invalid_transition(event: &impl Debug, from: &impl Debug) -> Self {
        Self::InvalidTransition {
            event: format!("{event:?}"),
            from: format!("{from:?}"),
        }
    }

    pub(crate) fn self_transition(state: &impl Debug, event: &impl Debug) -> Self {
        Self::SelfTransition {
            state: format!("{state:?}"),
            event: format!("{event:?}"),
        }
    }

    /// The machine was not ready to process events: either never started or
    /// configured with no transitions.
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotStarted | Self::NoTransitions)
    }

    /// A transition was refused, either at processing time or because a
    /// self-loop was registered through `add_transition`.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. } | Self::SelfTransition { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestState {
        One,
    }

    #[derive(Debug)]
    enum TestEvent {
        B,
    }

    #[test]
    fn invalid_transition_names_event_and_state() {
        let err = FsmError::invalid_transition(&TestEvent::B, &TestState::One);
        assert_eq!(err.to_string(), "Event 'B' cannot be applied to state 'One'");
    }

    #[test]
    fn error_kinds_are_grouped() {
        assert!(FsmError::NotStarted.is_not_initialized());
        assert!(FsmError::NoTransitions.is_not_initialized());
        assert!(!FsmError::NotStarted.is_invalid_transition());

        let rejected = FsmError::invalid_transition(&TestEvent::B, &TestState::One);
        let self_loop = FsmError::self_transition(&TestState::One, &TestEvent::B);
        assert!(rejected.is_invalid_transition());
        assert!(self_loop.is_invalid_transition());
        assert!(!self_loop.is_not_initialized());
    }

    #[test]
    fn self_transition_points_at_circular_registration() {
        let err = FsmError::self_transition(&TestState::One, &TestEvent::B);
        assert!(err.to_string().contains("add_circular_transition()"));
    }
}
