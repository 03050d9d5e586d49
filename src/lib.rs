//! Turnstile: a small synchronous finite-state machine engine
//!
//! A [`StateMachine`] holds a caller-defined transition table
//! (`state -> event -> state`), a current-state cursor and a default error
//! state. Each processed event is either accepted, moving the cursor and
//! notifying every listener, or rejected, which moves the cursor to the error
//! state and returns [`FsmError::InvalidTransition`].
//!
//! # Core Concepts
//!
//! - **State / Event**: any `Clone + Eq + Hash + Debug` value
//! - **Transition table**: last registration for a `(state, event)` pair wins
//! - **Listeners**: closures or trait objects called with `(old, event, new)`
//! - **History**: optional recording of accepted transitions
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use turnstile::{fsm_enum, HistoryRecorder, StateMachineBuilder};
//!
//! fsm_enum! {
//!     enum Gate { Locked, Unlocked, Broken }
//! }
//!
//! fsm_enum! {
//!     enum Input { Coin, Push }
//! }
//!
//! let recorder = Arc::new(HistoryRecorder::<Gate, Input>::new());
//! let mut gate = StateMachineBuilder::new(Gate::Broken)
//!     .transition(Gate::Locked, Input::Coin, Gate::Unlocked)
//!     .transition(Gate::Unlocked, Input::Push, Gate::Locked)
//!     .circular(Gate::Unlocked, Input::Coin)
//!     .listener(recorder.clone())
//!     .start(Gate::Locked)
//!     .build()
//!     .unwrap();
//!
//! gate.process(Input::Coin).unwrap();
//! gate.process(Input::Coin).unwrap();
//! gate.process(Input::Push).unwrap();
//!
//! assert_eq!(gate.current_state(), Some(&Gate::Locked));
//! assert_eq!(recorder.snapshot().len(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder};
pub use crate::core::{
    Event, HistoryRecorder, SharedListener, State, StateChangeListener, StateHistory,
    StateTransition,
};
pub use crate::engine::{FsmError, StateMachine, TransitionTable};
