//! Macros for declaring state identifiers.

/// Declare a fieldless enum usable as a state identifier.
///
/// Derives everything both machines need, plus `Serialize`/`Deserialize`,
/// and adds an `ALL` slice and a `name()` accessor. The calling crate must
/// depend on `serde`.
///
/// # Example
///
/// ```
/// use statecraft::state_enum;
///
/// state_enum! {
///     pub enum Stance {
///         Idle,
///         Walking,
///         Jumping,
///     }
/// }
///
/// assert_eq!(Stance::ALL.len(), 3);
/// assert_eq!(Stance::Jumping.name(), "Jumping");
/// ```
#[macro_export]
macro_rules! state_enum {
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
            serde::Deserialize
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
    };
}

#[cfg(test)]
mod tests {
    use crate::node::{NodeMachine, StateNode};
    use std::collections::HashSet;

    state_enum! {
        enum TestState {
            Idle,
            Walking,
            Jumping,
        }
    }

    struct Plain(TestState);

    impl StateNode<TestState> for Plain {
        fn id(&self) -> TestState {
            self.0
        }
    }

    #[test]
    fn state_enum_macro_generates_names() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Walking.name(), "Walking");
        assert_eq!(TestState::Jumping.name(), "Jumping");
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestState::ALL,
            &[TestState::Idle, TestState::Walking, TestState::Jumping]
        );
        let unique: HashSet<_> = TestState::ALL.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn generated_enum_drives_a_machine() {
        let mut machine = NodeMachine::new();
        for state in TestState::ALL {
            machine.register(Plain(*state)).unwrap();
        }

        machine.initial(TestState::Idle, TestState::Idle).unwrap();
        assert!(machine.advance(TestState::Jumping).unwrap());
        assert_eq!(machine.current(), Some(&TestState::Jumping));
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        let json = serde_json::to_string(&PublicState::B).unwrap();
        assert_eq!(json, "\"B\"");
    }
}
