//! Value types shared by both machines.
//!
//! This module contains the pieces that carry no behavior of their own:
//! - State identifiers via the `StateId` trait
//! - The `(from, to)` `Transition` key
//! - Bounded transition history
//! - Error types for callbacks, lifecycle failures and registration conflicts

mod error;
mod history;
mod state;
mod transition;

pub use error::{CallbackError, CallbackResult, Hook, LifecycleError, RegistrationError};
pub use history::{HistoryEntry, StateHistory, DEFAULT_HISTORY_LIMIT};
pub use state::StateId;
pub use transition::Transition;

pub(crate) use state::describe;
