//! Build errors for the state machine builder.

use crate::engine::FsmError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    /// Every rejected registration, in the order it was added.
    #[error("Invalid transitions: {}", join(.0))]
    InvalidTransitions(Vec<FsmError>),
}

fn join(errors: &[FsmError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
