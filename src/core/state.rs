//! Capability traits for state and event values.
//!
//! The engine treats states and events as opaque keys. Anything that can be
//! cloned, compared, hashed and debug-printed qualifies, so plain enums work
//! without extra impls.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are used as keys in the transition table and as values in the
/// current-state cursor.
///
/// # Required Traits
///
/// - `Clone`: the cursor and notifications hold owned copies
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states are named in errors and log lines
///
/// This trait is blanket-implemented; you never implement it by hand.
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
/// assert_state(&Door::Open);
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<T> State for T where T: Clone + Eq + Hash + Debug {}

/// Trait for events that drive transitions.
///
/// Same capabilities as [`State`]: events are the inner key of the
/// transition table.
pub trait Event: Clone + Eq + Hash + Debug {}

impl<T> Event for T where T: Clone + Eq + Hash + Debug {}
