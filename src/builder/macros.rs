//! Macros for declaring state and event enums.

/// Declare a fieldless enum usable as a state or event.
///
/// Derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`, and serde's
/// `Serialize` / `Deserialize` (the calling crate needs `serde`), and adds:
///
/// - `name(&self) -> &'static str`
/// - `ALL`, every variant in declaration order
/// - a `Display` impl printing the variant name
///
/// # Example
///
/// ```
/// use turnstile::fsm_enum;
///
/// fsm_enum! {
///     pub enum Gate {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// assert_eq!(Gate::Locked.name(), "Locked");
/// assert_eq!(Gate::ALL, &[Gate::Locked, Gate::Unlocked]);
/// assert_eq!(Gate::Unlocked.to_string(), "Unlocked");
/// ```
#[macro_export]
macro_rules! fsm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::engine::StateMachine;

    fsm_enum! {
        enum TestState {
            One,
            Two,
            Error,
        }
    }

    fsm_enum! {
        enum TestEvent {
            A,
            B,
        }
    }

    #[test]
    fn fsm_enum_generates_names() {
        assert_eq!(TestState::One.name(), "One");
        assert_eq!(TestEvent::B.name(), "B");
        assert_eq!(TestState::Error.to_string(), "Error");
    }

    #[test]
    fn fsm_enum_lists_all_variants() {
        assert_eq!(TestState::ALL, &[TestState::One, TestState::Two, TestState::Error]);
        assert_eq!(TestEvent::ALL.len(), 2);
    }

    #[test]
    fn fsm_enum_types_drive_a_machine() {
        let mut machine = StateMachine::new(TestState::Error);
        machine
            .add_transition(TestState::One, TestEvent::A, TestState::Two)
            .unwrap();
        machine.start(TestState::One);
        machine.process(TestEvent::A).unwrap();

        assert_eq!(machine.current_state(), Some(&TestState::Two));
    }

    #[test]
    fn fsm_enum_serializes_by_name() {
        let json = serde_json::to_string(&TestState::Two).unwrap();
        assert_eq!(json, "\"Two\"");
        let restored: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, TestState::Two);
    }

    #[test]
    fn fsm_enum_supports_visibility() {
        fsm_enum! {
            /// Public states.
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::ALL.len(), 2);
    }
}
