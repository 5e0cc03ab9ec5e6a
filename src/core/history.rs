//! Bounded record of completed transitions.
//!
//! Both machines append to a history every time a transition completes its
//! state swap. The history is diagnostic only: nothing in the machines reads
//! it back to make decisions.

use super::state::StateId;
use super::transition::Transition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of entries kept when no explicit limit is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A transition together with the moment its state swap happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<S> {
    pub transition: Transition<S>,
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of transitions.
///
/// Once `limit` entries are stored, recording a new one evicts the oldest.
/// A limit of zero disables recording.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateHistory, Transition};
///
/// let mut history = StateHistory::with_limit(2);
/// history.record(Transition::new(1, 2));
/// history.record(Transition::new(2, 3));
/// history.record(Transition::new(3, 4));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.path(), vec![&2, &3, &4]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S> {
    entries: VecDeque<HistoryEntry<S>>,
    limit: usize,
}

impl<S: StateId> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> StateHistory<S> {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Append a transition stamped with the current time.
    pub fn record(&mut self, transition: Transition<S>) {
        self.record_at(transition, Utc::now());
    }

    pub(crate) fn record_at(&mut self, transition: Transition<S>, timestamp: DateTime<Utc>) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            transition,
            timestamp,
        });
    }

    /// States traversed, oldest first: the `from` of the first retained
    /// entry, then the `to` of every entry.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.front() {
            path.push(&first.transition.from);
        }
        for entry in &self.entries {
            path.push(&entry.transition.to);
        }
        path
    }

    /// Time between the first and last retained entries.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.front()?, self.entries.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&HistoryEntry<S>> {
        self.entries.back()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry<S>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Walking,
        Jumping,
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert_eq!(history.limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn path_returns_state_sequence() {
        let mut history = StateHistory::new();
        history.record(Transition::new(TestState::Idle, TestState::Walking));
        history.record(Transition::new(TestState::Walking, TestState::Jumping));

        assert_eq!(
            history.path(),
            vec![&TestState::Idle, &TestState::Walking, &TestState::Jumping]
        );
    }

    #[test]
    fn oldest_entries_are_evicted() {
        let mut history = StateHistory::with_limit(2);
        history.record(Transition::new(TestState::Idle, TestState::Walking));
        history.record(Transition::new(TestState::Walking, TestState::Jumping));
        history.record(Transition::new(TestState::Jumping, TestState::Idle));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.last().unwrap().transition,
            Transition::new(TestState::Jumping, TestState::Idle)
        );
        assert_eq!(history.path()[0], &TestState::Walking);
    }

    #[test]
    fn zero_limit_disables_recording() {
        let mut history = StateHistory::with_limit(0);
        history.record(Transition::new(TestState::Idle, TestState::Walking));
        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut history = StateHistory::new();
        let start = Utc::now();
        history.record_at(Transition::new(TestState::Idle, TestState::Walking), start);
        history.record_at(
            Transition::new(TestState::Walking, TestState::Idle),
            start + chrono::Duration::milliseconds(250),
        );

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::with_limit(8);
        history.record(Transition::new(TestState::Idle, TestState::Jumping));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.limit(), 8);
        assert_eq!(deserialized.last(), history.last());
    }
}
