//! The transition engine.
//!
//! [`StateMachine`] owns a [`TransitionTable`], the current-state cursor,
//! a default error state and a set of listeners. Events are processed
//! synchronously: lookup, cursor update and listener fan-out all finish
//! before [`StateMachine::process`] returns.

mod error;
mod machine;
mod table;

pub use error::FsmError;
pub use machine::StateMachine;
pub use table::TransitionTable;
