//! Registry mapping each `(from, to)` edge to its record.

use super::record::TransitionRecord;
use crate::core::{RegistrationError, StateId, Transition};
use std::collections::HashMap;

/// Write-once table of legal edges.
pub struct TransitionTable<S, Env = ()> {
    records: HashMap<Transition<S>, TransitionRecord<S, Env>>,
}

impl<S: StateId, Env: Clone + Send + Sync + 'static> Default for TransitionTable<S, Env> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId, Env: Clone + Send + Sync + 'static> TransitionTable<S, Env> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Register the edge `from -> to`.
    ///
    /// Re-registering an existing edge is rejected and logged; the record
    /// registered first stays bound.
    pub fn register(
        &mut self,
        from: S,
        to: S,
        record: TransitionRecord<S, Env>,
    ) -> Result<(), RegistrationError> {
        let transition = Transition::new(from, to);
        if self.records.contains_key(&transition) {
            log::warn!("Transition {transition} is already registered, keeping the original");
            return Err(RegistrationError::DuplicateTransition {
                transition: transition.to_string(),
            });
        }
        self.records.insert(transition, record);
        Ok(())
    }

    pub fn lookup(&self, from: &S, to: &S) -> Option<&TransitionRecord<S, Env>> {
        self.records.get(&Transition::new(from.clone(), to.clone()))
    }

    pub(crate) fn get_mut(
        &mut self,
        transition: &Transition<S>,
    ) -> Option<&mut TransitionRecord<S, Env>> {
        self.records.get_mut(transition)
    }

    pub fn contains(&self, transition: &Transition<S>) -> bool {
        self.records.contains_key(transition)
    }

    /// Every registered edge, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = &Transition<S>> {
        self.records.keys()
    }

    /// Destinations reachable from `state` in one step.
    pub fn targets_from<'a>(&'a self, state: &'a S) -> impl Iterator<Item = &'a S> + 'a {
        self.records
            .keys()
            .filter(move |t| &t.from == state)
            .map(|t| &t.to)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Door {
        Closed,
        Open,
        Locked,
    }

    fn noop() -> TransitionRecord<Door> {
        TransitionRecord::new(|_| Ok(()))
    }

    #[test]
    fn register_then_lookup() {
        let mut table = TransitionTable::new();
        table.register(Door::Closed, Door::Open, noop()).unwrap();

        assert!(table.lookup(&Door::Closed, &Door::Open).is_some());
        assert!(table.lookup(&Door::Open, &Door::Closed).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut table = TransitionTable::new();
        table.register(Door::Closed, Door::Open, noop()).unwrap();

        let second = noop().on_enter(|_| Ok(()));
        let result = table.register(Door::Closed, Door::Open, second);

        assert_eq!(
            result,
            Err(RegistrationError::DuplicateTransition {
                transition: "Closed -> Open".to_string(),
            })
        );
        assert_eq!(table.len(), 1);
        assert!(!table.lookup(&Door::Closed, &Door::Open).unwrap().has_enter());
    }

    #[test]
    fn targets_from_lists_outgoing_edges() {
        let mut table = TransitionTable::new();
        table.register(Door::Closed, Door::Open, noop()).unwrap();
        table.register(Door::Closed, Door::Locked, noop()).unwrap();
        table.register(Door::Open, Door::Closed, noop()).unwrap();

        let mut targets: Vec<_> = table.targets_from(&Door::Closed).copied().collect();
        targets.sort_by_key(|d| format!("{d:?}"));
        assert_eq!(targets, vec![Door::Locked, Door::Open]);
        assert!(table.targets_from(&Door::Locked).next().is_none());
    }
}
