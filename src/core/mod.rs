//! Core value types shared by the engine and its callers.
//!
//! - `State` / `Event` capability traits for table keys
//! - `StateChangeListener` for observing accepted transitions
//! - Transition history and a recording listener

mod history;
mod listener;
mod state;

pub use history::{HistoryRecorder, StateHistory, StateTransition};
pub use listener::{SharedListener, StateChangeListener};
pub use state::{Event, State};
