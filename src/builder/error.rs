//! Build errors for machine builders.

use crate::core::{LifecycleError, RegistrationError};
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("No nodes defined. Add at least one node")]
    NoNodes,

    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error("Initial transition failed: {0}")]
    Initial(#[from] LifecycleError),
}
