//! Observers notified on accepted transitions.

use super::state::{Event, State};
use std::sync::Arc;

/// Observer of accepted state transitions.
///
/// The engine calls [`on_change`](Self::on_change) synchronously, once per
/// accepted event, after the current state has been updated. Rejected events
/// never reach listeners.
///
/// Any `Fn(&S, &E, &S)` closure is a listener, so most callers never
/// implement this trait directly.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use turnstile::core::{SharedListener, StateChangeListener};
///
/// let listener: SharedListener<u8, char> = Arc::new(|old: &u8, event: &char, new: &u8| {
///     println!("{old} --{event}--> {new}");
/// });
/// listener.on_change(&1, &'a', &2);
/// ```
pub trait StateChangeListener<S: State, E: Event>: Send + Sync {
    /// Called with the previous state, the event that caused the change and
    /// the new state.
    fn on_change(&self, old: &S, event: &E, new: &S);
}

impl<S, E, F> StateChangeListener<S, E> for F
where
    S: State,
    E: Event,
    F: Fn(&S, &E, &S) + Send + Sync,
{
    fn on_change(&self, old: &S, event: &E, new: &S) {
        self(old, event, new)
    }
}

/// Shared listener handle. Membership in a listener set is by pointer
/// identity of this `Arc`.
pub type SharedListener<S, E> = Arc<dyn StateChangeListener<S, E>>;
