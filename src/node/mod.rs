//! Node-driven state machine.
//!
//! Each state is backed by a long-lived [`StateNode`] and any registered
//! state can be reached from any other. Hooks request further transitions
//! through a [`NodeContext`]; those requests are queued and replayed after
//! the running transition completes, so at most one transition is ever in
//! flight.

mod context;
mod guard;
mod machine;
mod state_node;

pub use context::NodeContext;
pub use machine::NodeMachine;
pub use state_node::StateNode;
