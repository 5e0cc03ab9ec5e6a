//! Handle passed to node hooks.

use crate::core::StateId;
use std::collections::VecDeque;

/// What a node sees of its machine while one of its hooks runs.
///
/// Hooks cannot reach the machine directly; they request transitions through
/// [`advance`](Self::advance), which queues the request. Queued requests run
/// in FIFO order once the running transition (or update) has finished.
pub struct NodeContext<'a, S> {
    current: Option<&'a S>,
    previous: Option<&'a S>,
    requests: &'a mut VecDeque<S>,
}

impl<'a, S: StateId> NodeContext<'a, S> {
    pub(crate) fn new(
        current: Option<&'a S>,
        previous: Option<&'a S>,
        requests: &'a mut VecDeque<S>,
    ) -> Self {
        Self {
            current,
            previous,
            requests,
        }
    }

    pub fn current(&self) -> Option<&S> {
        self.current
    }

    pub fn previous(&self) -> Option<&S> {
        self.previous
    }

    /// Request a transition to `next`.
    ///
    /// Always returns `false`: the request is deferred, never applied inline.
    pub fn advance(&mut self, next: S) -> bool {
        log::debug!("Deferring advance to {next:?} until the running transition completes");
        self.requests.push_back(next);
        false
    }

    /// Requests queued so far, including ones from earlier hooks.
    pub fn pending(&self) -> usize {
        self.requests.len()
    }
}
