//! Property-based tests for the transition engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables and event sequences.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use turnstile::{fsm_enum, FsmError, SharedListener, StateMachine};

fsm_enum! {
    enum TestState {
        One,
        Two,
        Three,
        Four,
        Error,
    }
}

fsm_enum! {
    enum TestEvent {
        A,
        B,
        C,
    }
}

fn arbitrary_state() -> impl Strategy<Value = TestState> {
    prop::sample::select(TestState::ALL)
}

fn arbitrary_event() -> impl Strategy<Value = TestEvent> {
    prop::sample::select(TestEvent::ALL)
}

prop_compose! {
    fn arbitrary_transition()(
        from in arbitrary_state(),
        on in arbitrary_event(),
        to in arbitrary_state()
    ) -> (TestState, TestEvent, TestState) {
        (from, on, to)
    }
}

type Calls = Arc<Mutex<Vec<(TestState, TestEvent, TestState)>>>;

fn recording_listener() -> (SharedListener<TestState, TestEvent>, Calls) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let listener: SharedListener<TestState, TestEvent> =
        Arc::new(move |old: &TestState, event: &TestEvent, new: &TestState| {
            sink.lock().unwrap().push((*old, *event, *new));
        });
    (listener, calls)
}

proptest! {
    #[test]
    fn registered_transition_is_taken(
        (from, on, to) in arbitrary_transition()
    ) {
        prop_assume!(from != to);
        let mut machine = StateMachine::new(TestState::Error);

        machine.add_transition(from, on, to).unwrap();
        prop_assert!(machine.is_allowed(&from, &on));

        machine.start(from);
        machine.process(on).unwrap();
        prop_assert_eq!(machine.current_state(), Some(&to));
    }

    #[test]
    fn self_transition_always_fails(state in arbitrary_state(), on in arbitrary_event()) {
        let mut machine = StateMachine::new(TestState::Error);

        let result = machine.add_transition(state, on, state);

        prop_assert!(
            matches!(result, Err(FsmError::SelfTransition { .. })),
            "expected SelfTransition, got {:?}",
            result
        );
        prop_assert!(!machine.is_allowed(&state, &on));
    }

    #[test]
    fn circular_transition_always_succeeds(state in arbitrary_state(), on in arbitrary_event()) {
        let mut machine = StateMachine::new(TestState::Error);

        machine.add_circular_transition(state, on);

        prop_assert_eq!(machine.destination(&state, &on), Some(&state));
    }

    #[test]
    fn last_registration_wins(
        transitions in prop::collection::vec(arbitrary_transition(), 1..20)
    ) {
        let mut machine = StateMachine::new(TestState::Error);
        let mut expected = std::collections::HashMap::new();

        for (from, on, to) in transitions {
            if machine.add_transition(from, on, to).is_ok() {
                expected.insert((from, on), to);
            }
        }

        prop_assert_eq!(machine.table().len(), expected.len());
        for ((from, on), to) in &expected {
            prop_assert_eq!(machine.destination(from, on), Some(to));
        }
    }

    #[test]
    fn process_matches_table_lookup(
        transitions in prop::collection::vec(arbitrary_transition(), 1..20),
        start in arbitrary_state(),
        events in prop::collection::vec(arbitrary_event(), 1..30)
    ) {
        let (listener, calls) = recording_listener();
        let mut machine = StateMachine::new(TestState::Error);
        for (from, on, to) in transitions {
            let _ = machine.add_transition(from, on, to);
        }
        prop_assume!(!machine.table().is_empty());
        machine.add_listener(listener);
        machine.start(start);

        let mut accepted = Vec::new();
        for event in events {
            let before = *machine.current_state().unwrap();
            let expected = machine.destination(&before, &event).copied();

            match (machine.process(event), expected) {
                (Ok(()), Some(to)) => {
                    prop_assert_eq!(machine.current_state(), Some(&to));
                    accepted.push((before, event, to));
                }
                (Err(err), None) => {
                    prop_assert!(err.is_invalid_transition());
                    prop_assert_eq!(machine.current_state(), Some(&TestState::Error));
                }
                (result, expected) => {
                    prop_assert!(false, "process returned {:?}, table said {:?}", result, expected);
                }
            }
        }

        let notified = calls.lock().unwrap().clone();
        prop_assert_eq!(notified, accepted);
    }

    #[test]
    fn is_allowed_never_changes_state(
        transitions in prop::collection::vec(arbitrary_transition(), 0..10),
        state in arbitrary_state(),
        event in arbitrary_event()
    ) {
        let mut machine = StateMachine::new(TestState::Error);
        for (from, on, to) in transitions {
            let _ = machine.add_transition(from, on, to);
        }
        let table_len = machine.table().len();

        let _ = machine.is_allowed(&state, &event);

        prop_assert_eq!(machine.current_state(), None);
        prop_assert_eq!(machine.table().len(), table_len);
    }
}
