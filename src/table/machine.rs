//! Edge-restricted state machine driven by a transition table.

use super::record::TransitionRecord;
use super::registry::TransitionTable;
use super::routine::Routine;
use crate::core::{Hook, LifecycleError, RegistrationError, StateHistory, StateId, Transition};

/// State machine whose legal moves are the registered edges of its table.
///
/// Each `advance` runs the exit callback of the transition that led into
/// the current state, swaps states, binds the new edge's routine and runs
/// its enter callback. `update` runs the execute callback of the active edge
/// once per host tick.
///
/// # Example
///
/// ```rust
/// use statecraft::table::{TableMachine, TransitionRecord};
///
/// let mut door = TableMachine::new("closed");
/// door.register("closed", "open", TransitionRecord::new(|_| Ok(()))).unwrap();
///
/// assert!(!door.can_advance(&"locked"));
/// assert!(door.advance("open").unwrap());
/// assert_eq!(door.state(), &"open");
/// assert_eq!(door.previous_state(), &"closed");
/// ```
pub struct TableMachine<S: StateId, Env: Clone + Send + Sync + 'static = ()> {
    table: TransitionTable<S, Env>,
    current: S,
    previous: S,
    locked: bool,
    active: Option<Transition<S>>,
    routine: Option<Routine<Env>>,
    history: StateHistory<S>,
}

impl<S: StateId> TableMachine<S> {
    /// Create a machine resting in `start` with an empty table and no
    /// routine environment.
    pub fn new(start: S) -> Self {
        Self::starting_in(start)
    }
}

impl<S: StateId, Env: Clone + Send + Sync + 'static> TableMachine<S, Env> {
    /// Create a machine resting in `start` whose routines run against `Env`.
    pub fn starting_in(start: S) -> Self {
        Self::with_table(start, TransitionTable::new(), StateHistory::new())
    }

    pub(crate) fn with_table(
        start: S,
        table: TransitionTable<S, Env>,
        history: StateHistory<S>,
    ) -> Self {
        Self {
            table,
            current: start.clone(),
            previous: start,
            locked: false,
            active: None,
            routine: None,
            history,
        }
    }

    /// Put the machine in `start` without firing any callback.
    pub fn initialize(&mut self, start: S) {
        self.previous = start.clone();
        self.current = start;
        self.active = None;
        self.routine = None;
    }

    pub fn register(
        &mut self,
        from: S,
        to: S,
        record: TransitionRecord<S, Env>,
    ) -> Result<(), RegistrationError> {
        self.table.register(from, to, record)
    }

    pub fn can_advance(&self, next: &S) -> bool {
        !self.locked && self.table.lookup(&self.current, next).is_some()
    }

    /// Move along the edge `current -> next`.
    ///
    /// Returns `Ok(false)` without side effects while locked or when the edge
    /// is not registered. A failing exit callback leaves the state untouched;
    /// a failing enter callback is reported after the swap has happened.
    pub fn advance(&mut self, next: S) -> Result<bool, LifecycleError> {
        if self.locked {
            log::debug!("Machine is locked, ignoring advance to {next:?}");
            return Ok(false);
        }

        let transition = Transition::new(self.current.clone(), next);
        if !self.table.contains(&transition) {
            log::warn!("No transition registered for {transition}");
            return Ok(false);
        }

        let incoming = Transition::new(self.previous.clone(), self.current.clone());
        if let Some(record) = self.table.get_mut(&incoming) {
            record
                .exit(&incoming)
                .map_err(|source| LifecycleError::new(Hook::Exit, &incoming, source))?;
        }

        self.previous = std::mem::replace(&mut self.current, transition.to.clone());
        self.history.record(transition.clone());
        log::debug!("Advanced {transition}");

        self.routine = self
            .table
            .lookup(&transition.from, &transition.to)
            .and_then(|record| record.spawn_routine());
        let entered = match self.table.get_mut(&transition) {
            Some(record) => record.enter(&transition),
            None => Ok(()),
        };
        self.active = Some(transition.clone());
        entered.map_err(|source| LifecycleError::new(Hook::Enter, &transition, source))?;

        Ok(true)
    }

    /// Run the execute callback of the active transition. Called once per tick.
    pub fn update(&mut self) -> Result<(), LifecycleError> {
        let Some(active) = self.active.as_ref() else {
            return Ok(());
        };
        log::trace!("Executing {active}");
        match self.table.get_mut(active) {
            Some(record) => record
                .execute(active)
                .map_err(|source| LifecycleError::new(Hook::Execute, active, source)),
            None => Ok(()),
        }
    }

    /// Refuse every transition until [`unlock`](Self::unlock).
    pub fn lock(&mut self) {
        log::debug!("Locking machine in {:?}", self.current);
        self.locked = true;
    }

    /// Clear the lock and replay `advance(previous)`.
    ///
    /// The lock is always cleared. When the edge `current -> previous` is not
    /// registered nothing fires and `Ok(false)` is returned.
    pub fn unlock(&mut self) -> Result<bool, LifecycleError> {
        self.locked = false;
        let previous = self.previous.clone();
        if !self.can_advance(&previous) {
            log::debug!(
                "Unlocked without replay: no transition from {:?} to {:?}",
                self.current,
                previous
            );
            return Ok(false);
        }
        self.advance(previous)
    }

    /// Run the exit callback of the active transition and drop it.
    ///
    /// Dropping a machine does not call this; hosts that need a final exit
    /// call it during their own teardown. The current state is kept.
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        self.routine = None;
        let Some(active) = self.active.take() else {
            return Ok(());
        };
        match self.table.get_mut(&active) {
            Some(record) => record
                .exit(&active)
                .map_err(|source| LifecycleError::new(Hook::Exit, &active, source)),
            None => Ok(()),
        }
    }

    /// Hand the routine bound by the last `advance` to an external runner.
    pub fn take_routine(&mut self) -> Option<Routine<Env>> {
        self.routine.take()
    }

    pub fn has_routine(&self) -> bool {
        self.routine.is_some()
    }

    pub fn state(&self) -> &S {
        &self.current
    }

    pub fn previous_state(&self) -> &S {
        &self.previous
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn active_transition(&self) -> Option<&Transition<S>> {
        self.active.as_ref()
    }

    pub fn table(&self) -> &TransitionTable<S, Env> {
        &self.table
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }
}
