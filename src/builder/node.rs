//! Builder for node-driven machines.

use crate::builder::error::BuildError;
use crate::core::{StateHistory, StateId, DEFAULT_HISTORY_LIMIT};
use crate::node::{NodeMachine, StateNode};

/// Builder for constructing a [`NodeMachine`] with a fluent API.
///
/// Listeners are subscribed before the optional initial transition runs, so
/// they observe it.
pub struct NodeMachineBuilder<S: StateId> {
    nodes: Vec<Box<dyn StateNode<S>>>,
    listeners: Vec<Box<dyn FnMut(&S)>>,
    initial: Option<(S, S)>,
    history_limit: usize,
}

impl<S: StateId> NodeMachineBuilder<S> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            listeners: Vec::new(),
            initial: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a node (at least one is required).
    pub fn node<N>(mut self, node: N) -> Self
    where
        N: StateNode<S> + 'static,
    {
        self.nodes.push(Box::new(node));
        self
    }

    /// Subscribe a change listener.
    pub fn on_change<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&S) + 'static,
    {
        self.listeners.push(Box::new(listener));
        self
    }

    /// Run `initial(current, previous)` as the last build step (optional).
    pub fn initial(mut self, current: S, previous: S) -> Self {
        self.initial = Some((current, previous));
        self
    }

    /// Number of history entries to keep (zero disables history).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine.
    /// Returns an error on a missing or duplicate node, or when the initial
    /// transition fails.
    pub fn build(self) -> Result<NodeMachine<S>, BuildError> {
        if self.nodes.is_empty() {
            return Err(BuildError::NoNodes);
        }

        let mut machine = NodeMachine::with_history(StateHistory::with_limit(self.history_limit));
        for node in self.nodes {
            machine.register_boxed(node)?;
        }
        for listener in self.listeners {
            machine.on_change(listener);
        }
        if let Some((current, previous)) = self.initial {
            machine.initial(current, previous)?;
        }

        Ok(machine)
    }
}

impl<S: StateId> Default for NodeMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
