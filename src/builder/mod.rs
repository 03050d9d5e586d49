//! Builder API for ergonomic state machine construction.
//!
//! [`StateMachineBuilder`] collects transitions, listeners and an optional
//! start state, then validates everything in one pass. [`fsm_enum!`] declares
//! state and event enums with the derives the engine needs.
//!
//! [`fsm_enum!`]: crate::fsm_enum

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
