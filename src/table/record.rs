//! Callbacks registered for one `(from, to)` edge.

use super::routine::{Routine, RoutineFactory};
use crate::core::{CallbackResult, StateId, Transition};
use std::sync::Arc;

/// Callback slot of a transition record.
pub type Callback<S> = Box<dyn FnMut(&Transition<S>) -> CallbackResult>;

/// Everything registered for a single edge of a [`TransitionTable`].
///
/// The execute callback is required and therefore taken by the constructor;
/// enter, exit and the routine factory are optional.
///
/// # Example
///
/// ```rust
/// use statecraft::table::TransitionRecord;
///
/// let record: TransitionRecord<&str> = TransitionRecord::new(|_| Ok(()))
///     .on_enter(|t| {
///         println!("entering {}", t.to);
///         Ok(())
///     });
///
/// assert!(record.has_enter());
/// assert!(!record.has_exit());
/// ```
///
/// [`TransitionTable`]: super::TransitionTable
pub struct TransitionRecord<S, Env = ()> {
    on_execute: Callback<S>,
    on_enter: Option<Callback<S>>,
    on_exit: Option<Callback<S>>,
    routine: Option<RoutineFactory<Env>>,
}

impl<S: StateId, Env: Clone + Send + Sync + 'static> TransitionRecord<S, Env> {
    pub fn new<F>(on_execute: F) -> Self
    where
        F: FnMut(&Transition<S>) -> CallbackResult + 'static,
    {
        Self {
            on_execute: Box::new(on_execute),
            on_enter: None,
            on_exit: None,
            routine: None,
        }
    }

    /// Run when the edge becomes the active transition.
    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Transition<S>) -> CallbackResult + 'static,
    {
        self.on_enter = Some(Box::new(callback));
        self
    }

    /// Run when the machine leaves the state this edge led into.
    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Transition<S>) -> CallbackResult + 'static,
    {
        self.on_exit = Some(Box::new(callback));
        self
    }

    /// Attach a routine factory, invoked once per activation of the edge.
    pub fn routine<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Routine<Env> + Send + Sync + 'static,
    {
        self.routine = Some(Arc::new(factory));
        self
    }

    pub fn has_enter(&self) -> bool {
        self.on_enter.is_some()
    }

    pub fn has_exit(&self) -> bool {
        self.on_exit.is_some()
    }

    pub fn has_routine(&self) -> bool {
        self.routine.is_some()
    }

    pub(crate) fn execute(&mut self, transition: &Transition<S>) -> CallbackResult {
        (self.on_execute)(transition)
    }

    pub(crate) fn enter(&mut self, transition: &Transition<S>) -> CallbackResult {
        self.on_enter.as_mut().map_or(Ok(()), |f| f(transition))
    }

    pub(crate) fn exit(&mut self, transition: &Transition<S>) -> CallbackResult {
        self.on_exit.as_mut().map_or(Ok(()), |f| f(transition))
    }

    pub(crate) fn spawn_routine(&self) -> Option<Routine<Env>> {
        self.routine.as_ref().map(|factory| factory())
    }
}
