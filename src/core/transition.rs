//! The `(from, to)` pair used as a registry key.

use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered pair of states.
///
/// Equality and hashing are structural: two transitions are equal iff both
/// endpoints are equal, and `A -> B` is a different key from `B -> A`.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Transition;
///
/// let open = Transition::new("closed", "open");
/// assert_eq!(open, Transition::new("closed", "open"));
/// assert_ne!(open, open.reversed());
/// assert_eq!(open.to_string(), "\"closed\" -> \"open\"");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Transition<S> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
}

impl<S: StateId> Transition<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    /// True when both endpoints name the same state.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }

    /// The same edge walked the other way.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl<S: StateId> fmt::Display for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Walking,
        Jumping,
    }

    #[test]
    fn equality_is_structural() {
        let a = Transition::new(TestState::Idle, TestState::Walking);
        let b = Transition::new(TestState::Idle, TestState::Walking);
        assert_eq!(a, b);
    }

    #[test]
    fn direction_matters() {
        let forward = Transition::new(TestState::Idle, TestState::Walking);
        assert_ne!(forward, forward.reversed());
        assert_eq!(forward.reversed().from, TestState::Walking);
    }

    #[test]
    fn keys_only_collide_when_equal() {
        let mut map = HashMap::new();
        map.insert(Transition::new(TestState::Idle, TestState::Walking), 1);
        map.insert(Transition::new(TestState::Walking, TestState::Idle), 2);
        map.insert(Transition::new(TestState::Idle, TestState::Jumping), 3);
        map.insert(Transition::new(TestState::Idle, TestState::Walking), 4);

        assert_eq!(map.len(), 3);
        assert_eq!(map[&Transition::new(TestState::Idle, TestState::Walking)], 4);
        assert_eq!(map[&Transition::new(TestState::Walking, TestState::Idle)], 2);
    }

    #[test]
    fn self_transition_is_detected() {
        assert!(Transition::new(TestState::Idle, TestState::Idle).is_self_transition());
        assert!(!Transition::new(TestState::Idle, TestState::Jumping).is_self_transition());
    }

    #[test]
    fn display_shows_both_endpoints() {
        let transition = Transition::new(TestState::Walking, TestState::Jumping);
        assert_eq!(transition.to_string(), "Walking -> Jumping");
    }

    #[test]
    fn transition_serializes_correctly() {
        let transition = Transition::new(TestState::Idle, TestState::Jumping);
        let json = serde_json::to_string(&transition).unwrap();
        let deserialized: Transition<TestState> = serde_json::from_str(&json).unwrap();
        assert_eq!(transition, deserialized);
    }
}
