//! Table-driven state machine.
//!
//! Every legal move is an explicitly registered `(from, to)` edge carrying
//! its own callbacks, so the table doubles as a protocol description.
//!
//! # Key Concepts
//!
//! - **Record**: execute (required), enter and exit callbacks plus an optional
//!   routine factory for one edge
//! - **Table**: write-once registry of records keyed by [`Transition`]
//! - **Machine**: current/previous state, the active edge and a lock
//! - **Routines**: `stillwater` effects bound on each advance and driven by
//!   an external runner
//!
//! [`Transition`]: crate::core::Transition

mod machine;
mod record;
mod registry;
mod routine;

pub use machine::TableMachine;
pub use record::{Callback, TransitionRecord};
pub use registry::TransitionTable;
pub use routine::{Routine, RoutineFactory};
