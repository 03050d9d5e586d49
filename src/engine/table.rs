//! Transition table: `state -> (event -> state)`.

use crate::core::{Event, State};
use std::collections::HashMap;

/// Registered transition rules.
///
/// Each `(state, event)` pair maps to exactly one destination; inserting the
/// same pair again replaces the destination.
#[derive(Clone, Debug)]
pub struct TransitionTable<S, E> {
    transitions: HashMap<S, HashMap<E, S>>,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Record `from --on--> to`, returning the destination it replaced.
    pub(crate) fn insert(&mut self, from: S, on: E, to: S) -> Option<S> {
        self.transitions.entry(from).or_default().insert(on, to)
    }

    /// Destination for `event` received in `state`.
    pub fn get(&self, state: &S, event: &E) -> Option<&S> {
        self.transitions.get(state)?.get(event)
    }

    pub fn contains(&self, state: &S, event: &E) -> bool {
        self.get(state, event).is_some()
    }

    /// Outgoing `(event, destination)` pairs for `state`.
    pub fn events_from<'a>(&'a self, state: &S) -> impl Iterator<Item = (&'a E, &'a S)> + 'a {
        self.transitions
            .get(state)
            .into_iter()
            .flat_map(|events| events.iter())
    }

    /// States with at least one outgoing transition.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.transitions.keys()
    }

    /// Number of registered `(state, event)` pairs.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

impl<S: State, E: Event> Default for TransitionTable<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
