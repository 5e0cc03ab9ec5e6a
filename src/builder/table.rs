//! Builder for table-driven machines.

use crate::builder::error::BuildError;
use crate::core::{StateHistory, StateId, DEFAULT_HISTORY_LIMIT};
use crate::table::{TableMachine, TransitionRecord, TransitionTable};

/// Builder for constructing a [`TableMachine`] with a fluent API.
///
/// Unlike [`TableMachine::register`], a duplicate edge fails the build.
///
/// # Example
///
/// ```rust
/// use statecraft::builder::TableMachineBuilder;
/// use statecraft::table::TransitionRecord;
///
/// let machine = TableMachineBuilder::new()
///     .initial("closed")
///     .transition("closed", "open", TransitionRecord::new(|_| Ok(())))
///     .transition("open", "closed", TransitionRecord::new(|_| Ok(())))
///     .history_limit(16)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), &"closed");
/// assert_eq!(machine.table().len(), 2);
/// ```
pub struct TableMachineBuilder<S: StateId, Env: Clone + Send + Sync + 'static = ()> {
    initial: Option<S>,
    transitions: Vec<(S, S, TransitionRecord<S, Env>)>,
    history_limit: usize,
}

impl<S: StateId> TableMachineBuilder<S> {
    /// Create a builder for a machine without a routine environment.
    ///
    /// Use `TableMachineBuilder::<S, Env>::default()` when routines need one.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: StateId, Env: Clone + Send + Sync + 'static> TableMachineBuilder<S, Env> {
    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add the edge `from -> to`.
    pub fn transition(mut self, from: S, to: S, record: TransitionRecord<S, Env>) -> Self {
        self.transitions.push((from, to, record));
        self
    }

    /// Number of history entries to keep (zero disables history).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing or an edge repeats.
    pub fn build(self) -> Result<TableMachine<S, Env>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut table = TransitionTable::new();
        for (from, to, record) in self.transitions {
            table.register(from, to, record)?;
        }

        Ok(TableMachine::with_table(
            initial,
            table,
            StateHistory::with_limit(self.history_limit),
        ))
    }
}

impl<S: StateId, Env: Clone + Send + Sync + 'static> Default for TableMachineBuilder<S, Env> {
    fn default() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
