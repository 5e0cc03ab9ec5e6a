//! Statecraft: finite state machines for tick-driven game objects
//!
//! Statecraft offers two machines that solve the same problem, moving an
//! object between discrete modes through callbacks without ever running two
//! transitions at once, with different guarantees:
//!
//! - [`TableMachine`]: every legal move is a registered `(from, to)` edge with
//!   its own enter/execute/exit callbacks and an optional routine. Supports a
//!   lock that refuses transitions until it is lifted.
//! - [`NodeMachine`]: every state is backed by a long-lived [`StateNode`] and
//!   any state can reach any other. Transitions requested from inside a hook
//!   are queued and replayed after the running transition completes.
//!
//! Both machines are plain owned values driven from a single-threaded host
//! loop: call `advance` to switch and `update` once per tick.
//!
//! # Logging
//!
//! Rejections and failures are reported through the `log` facade. The crate
//! never installs a logger.
//!
//! # Example
//!
//! ```rust
//! use statecraft::core::CallbackResult;
//! use statecraft::node::{NodeContext, NodeMachine, StateNode};
//! use statecraft::state_enum;
//!
//! state_enum! {
//!     enum Stance {
//!         Idle,
//!         Jumping,
//!     }
//! }
//!
//! struct Idle;
//! struct Jumping;
//!
//! impl StateNode<Stance> for Idle {
//!     fn id(&self) -> Stance {
//!         Stance::Idle
//!     }
//! }
//!
//! impl StateNode<Stance> for Jumping {
//!     fn id(&self) -> Stance {
//!         Stance::Jumping
//!     }
//!
//!     // Land immediately; the request runs once this transition is done.
//!     fn on_enter(&mut self, ctx: &mut NodeContext<'_, Stance>) -> CallbackResult {
//!         ctx.advance(Stance::Idle);
//!         Ok(())
//!     }
//! }
//!
//! let mut machine = NodeMachine::new();
//! machine.register(Idle).unwrap();
//! machine.register(Jumping).unwrap();
//! machine.initial(Stance::Idle, Stance::Idle).unwrap();
//!
//! machine.advance(Stance::Jumping).unwrap();
//! assert_eq!(machine.current(), Some(&Stance::Idle));
//! assert_eq!(machine.previous(), Some(&Stance::Jumping));
//! ```

pub mod builder;
pub mod core;
pub mod node;
pub mod table;

// Re-export commonly used types
pub use builder::{BuildError, NodeMachineBuilder, TableMachineBuilder};
pub use crate::core::{CallbackError, CallbackResult, LifecycleError, StateId, Transition};
pub use node::{NodeContext, NodeMachine, StateNode};
pub use table::{TableMachine, TransitionRecord};
