//! Per-state behavior objects.

use super::context::NodeContext;
use crate::core::{CallbackResult, StateId};

/// Long-lived object backing one state of a [`NodeMachine`].
///
/// A node is bound to a single identifier for its whole lifetime. All hooks
/// default to doing nothing.
///
/// # Example
///
/// ```rust
/// use statecraft::core::CallbackResult;
/// use statecraft::node::{NodeContext, StateNode};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Mode {
///     Idle,
///     Walking,
/// }
///
/// struct Idle {
///     ticks: u32,
/// }
///
/// impl StateNode<Mode> for Idle {
///     fn id(&self) -> Mode {
///         Mode::Idle
///     }
///
///     fn on_update(&mut self, ctx: &mut NodeContext<'_, Mode>) -> CallbackResult {
///         self.ticks += 1;
///         if self.ticks > 30 {
///             ctx.advance(Mode::Walking);
///         }
///         Ok(())
///     }
///
///     fn on_reset(&mut self) -> CallbackResult {
///         self.ticks = 0;
///         Ok(())
///     }
/// }
/// ```
///
/// [`NodeMachine`]: super::NodeMachine
pub trait StateNode<S: StateId> {
    /// The state this node backs.
    fn id(&self) -> S;

    /// The machine just switched into this node's state.
    fn on_enter(&mut self, _ctx: &mut NodeContext<'_, S>) -> CallbackResult {
        Ok(())
    }

    /// The machine is about to switch away from this node's state.
    fn on_leave(&mut self, _ctx: &mut NodeContext<'_, S>) -> CallbackResult {
        Ok(())
    }

    /// One host tick while this node is bound.
    fn on_update(&mut self, _ctx: &mut NodeContext<'_, S>) -> CallbackResult {
        Ok(())
    }

    /// Bulk re-initialization, requested for every node at once.
    fn on_reset(&mut self) -> CallbackResult {
        Ok(())
    }
}
