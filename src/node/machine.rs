//! Mode-switching state machine backed by per-state nodes.

use super::context::NodeContext;
use super::guard::ProgressGuard;
use super::state_node::StateNode;
use crate::core::{
    describe, Hook, LifecycleError, RegistrationError, StateHistory, StateId, Transition,
};
use std::cell::Cell;
use std::collections::{HashMap, VecDeque};

type ChangeListener<S> = Box<dyn FnMut(&S)>;

/// State machine where any registered state is reachable from any other.
///
/// At most one transition runs at a time. Transitions requested from inside
/// a hook are queued and applied, oldest first, after the running transition
/// has finished its cleanup.
///
/// # Example
///
/// ```rust
/// use statecraft::node::{NodeMachine, StateNode};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Mode {
///     Idle,
///     Walking,
/// }
///
/// struct Plain(Mode);
///
/// impl StateNode<Mode> for Plain {
///     fn id(&self) -> Mode {
///         self.0
///     }
/// }
///
/// let mut machine = NodeMachine::new();
/// machine.register(Plain(Mode::Idle)).unwrap();
/// machine.register(Plain(Mode::Walking)).unwrap();
///
/// machine.initial(Mode::Idle, Mode::Idle).unwrap();
/// assert!(machine.advance(Mode::Walking).unwrap());
/// assert!(!machine.advance(Mode::Walking).unwrap());
/// assert_eq!(machine.current(), Some(&Mode::Walking));
/// assert_eq!(machine.previous(), Some(&Mode::Idle));
/// ```
pub struct NodeMachine<S: StateId> {
    nodes: Vec<Box<dyn StateNode<S>>>,
    index: HashMap<S, usize>,
    current: Option<S>,
    previous: Option<S>,
    bound: Option<usize>,
    in_progress: Cell<bool>,
    started: bool,
    pending: VecDeque<S>,
    listeners: Vec<ChangeListener<S>>,
    history: StateHistory<S>,
}

impl<S: StateId> Default for NodeMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateId> NodeMachine<S> {
    pub fn new() -> Self {
        Self::with_history(StateHistory::new())
    }

    pub(crate) fn with_history(history: StateHistory<S>) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            current: None,
            previous: None,
            bound: None,
            in_progress: Cell::new(false),
            started: false,
            pending: VecDeque::new(),
            listeners: Vec::new(),
            history,
        }
    }

    /// Register a node under its own identifier.
    pub fn register<N>(&mut self, node: N) -> Result<(), RegistrationError>
    where
        N: StateNode<S> + 'static,
    {
        self.register_boxed(Box::new(node))
    }

    pub fn register_boxed(&mut self, node: Box<dyn StateNode<S>>) -> Result<(), RegistrationError> {
        let id = node.id();
        if self.index.contains_key(&id) {
            log::warn!("State {id:?} already has a node, keeping the original");
            return Err(RegistrationError::DuplicateNode {
                state: describe(&id),
            });
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Subscribe to completed transitions. Listeners run in subscription order.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(&S) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Seed `previous` without firing hooks, then advance to `current`.
    ///
    /// The seed only takes effect when `previous` has a node; its node is
    /// bound so the first transition also calls its `on_leave`. Calling this
    /// again re-arms the startup transition.
    pub fn initial(&mut self, current: S, previous: S) -> Result<bool, LifecycleError> {
        if let Some(&index) = self.index.get(&previous) {
            self.current = Some(previous.clone());
            self.previous = Some(previous);
            self.bound = Some(index);
        }
        self.started = false;
        self.advance(current)
    }

    /// Switch to `next`.
    ///
    /// Returns `Ok(false)` when the request was queued, when `next` is already
    /// current, or when `next` has no node. A failing hook is returned as an
    /// error once the in-progress flag has been released; requests queued by
    /// the failed transition are discarded, as are requests left behind by a
    /// hook that panicked.
    pub fn advance(&mut self, next: S) -> Result<bool, LifecycleError> {
        self.discard_stale();
        self.switch_to(next)
    }

    // Outside callers never see queued requests unless a hook unwound
    // mid-transition and left them behind.
    fn discard_stale(&mut self) {
        if !self.in_progress.get() && !self.pending.is_empty() {
            log::warn!(
                "Discarding {} request(s) left by an interrupted transition",
                self.pending.len()
            );
            self.pending.clear();
        }
    }

    fn switch_to(&mut self, next: S) -> Result<bool, LifecycleError> {
        if self.in_progress.get() {
            log::debug!("Transition in progress, queueing {next:?}");
            self.pending.push_back(next);
            return Ok(false);
        }

        if self.current.as_ref() == Some(&next) && self.started {
            log::trace!("Already in {next:?}");
            return Ok(false);
        }

        let Some(&index) = self.index.get(&next) else {
            log::warn!("No node registered for state {next:?}");
            return Ok(false);
        };

        if let Err(err) = self.transition(index, next) {
            self.pending.clear();
            return Err(err);
        }

        while let Some(queued) = self.pending.pop_front() {
            self.switch_to(queued)?;
        }

        if let Some(current) = self.current.as_ref() {
            for listener in self.listeners.iter_mut() {
                listener(current);
            }
        }
        Ok(true)
    }

    fn transition(&mut self, index: usize, next: S) -> Result<(), LifecycleError> {
        let _guard = ProgressGuard::acquire(&self.in_progress);

        if let Some(bound) = self.bound.take() {
            let mut ctx =
                NodeContext::new(self.current.as_ref(), self.previous.as_ref(), &mut self.pending);
            if let Err(source) = self.nodes[bound].on_leave(&mut ctx) {
                return Err(LifecycleError::new(
                    Hook::NodeLeave,
                    describe(&self.nodes[bound].id()),
                    source,
                ));
            }
        }

        let previous = self.current.replace(next.clone());
        if let Some(from) = previous.clone() {
            let transition = Transition::new(from, next.clone());
            log::debug!("Switched {transition}");
            self.history.record(transition);
        } else {
            log::debug!("Started in {next:?}");
        }
        self.previous = previous;
        self.bound = Some(index);
        self.started = true;

        let mut ctx =
            NodeContext::new(self.current.as_ref(), self.previous.as_ref(), &mut self.pending);
        self.nodes[index]
            .on_enter(&mut ctx)
            .map_err(|source| LifecycleError::new(Hook::NodeEnter, describe(&next), source))
    }

    /// Run the bound node's `on_update`, then apply what it requested.
    ///
    /// When `on_update` fails, the requests it made are discarded.
    pub fn update(&mut self) -> Result<(), LifecycleError> {
        self.discard_stale();
        if let Some(index) = self.bound {
            let mut ctx =
                NodeContext::new(self.current.as_ref(), self.previous.as_ref(), &mut self.pending);
            if let Err(source) = self.nodes[index].on_update(&mut ctx) {
                self.pending.clear();
                return Err(LifecycleError::new(
                    Hook::NodeUpdate,
                    describe(&self.nodes[index].id()),
                    source,
                ));
            }
        }

        while let Some(next) = self.pending.pop_front() {
            self.switch_to(next)?;
        }
        Ok(())
    }

    /// Call `on_reset` on every registered node, in registration order.
    ///
    /// Current and previous states are left alone. Stops at the first
    /// failing node.
    pub fn reset_all(&mut self) -> Result<(), LifecycleError> {
        for node in self.nodes.iter_mut() {
            if let Err(source) = node.on_reset() {
                return Err(LifecycleError::new(
                    Hook::NodeReset,
                    describe(&node.id()),
                    source,
                ));
            }
        }
        Ok(())
    }

    /// Call `on_leave` on the bound node and unbind it.
    ///
    /// Dropping a machine does not do this. Current and previous are kept,
    /// requests made during the final `on_leave` are dropped, and the next
    /// `advance` behaves like a startup transition.
    pub fn shutdown(&mut self) -> Result<(), LifecycleError> {
        let Some(index) = self.bound.take() else {
            return Ok(());
        };
        self.started = false;

        let result = {
            let _guard = ProgressGuard::acquire(&self.in_progress);
            let mut ctx =
                NodeContext::new(self.current.as_ref(), self.previous.as_ref(), &mut self.pending);
            self.nodes[index].on_leave(&mut ctx)
        };
        self.pending.clear();

        result.map_err(|source| {
            LifecycleError::new(Hook::NodeLeave, describe(&self.nodes[index].id()), source)
        })
    }

    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    pub fn previous(&self) -> Option<&S> {
        self.previous.as_ref()
    }

    /// Whether a transition is running.
    ///
    /// Hooks never hold the machine, so callers only ever see `false`; a
    /// request made during a transition reaches the queue through
    /// [`NodeContext::advance`] instead.
    pub fn is_in_progress(&self) -> bool {
        self.in_progress.get()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn contains(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// Registered states, in registration order.
    pub fn states(&self) -> impl Iterator<Item = S> + '_ {
        self.nodes.iter().map(|node| node.id())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }
}
