//! Error types shared by both machines.

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Result returned by every user callback and node hook.
pub type CallbackResult = Result<(), CallbackError>;

/// Error raised by a user callback.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{CallbackError, CallbackResult};
///
/// fn on_enter(ammo: u32) -> CallbackResult {
///     if ammo == 0 {
///         return Err(CallbackError::new("cannot reload without ammo"));
///     }
///     Ok(())
/// }
///
/// assert!(on_enter(0).is_err());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CallbackError {
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl CallbackError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error, keeping it reachable through `source()`.
    pub fn with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The callback slot that produced a [`LifecycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    /// Table-driven transition entered
    Enter,
    /// Table-driven per-tick callback
    Execute,
    /// Table-driven transition left
    Exit,
    /// Node entered
    NodeEnter,
    /// Node left
    NodeLeave,
    /// Node per-tick callback
    NodeUpdate,
    /// Node bulk reset
    NodeReset,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Enter => "enter",
            Self::Execute => "execute",
            Self::Exit => "exit",
            Self::NodeEnter => "on_enter",
            Self::NodeLeave => "on_leave",
            Self::NodeUpdate => "on_update",
            Self::NodeReset => "on_reset",
        };
        f.write_str(name)
    }
}

/// A callback failed while the machine was running it.
///
/// This is the only error `advance`/`update` surface. Registry and
/// bookkeeping state is already consistent when it is returned.
#[derive(Debug, Error)]
#[error("{hook} callback failed for {target}: {source}")]
pub struct LifecycleError {
    pub hook: Hook,
    /// The transition or state whose callback failed, rendered for display
    pub target: String,
    #[source]
    pub source: CallbackError,
}

impl LifecycleError {
    pub(crate) fn new(hook: Hook, target: impl fmt::Display, source: CallbackError) -> Self {
        let err = Self {
            hook,
            target: target.to_string(),
            source,
        };
        log::error!("{err}");
        err
    }
}

/// Setup-time registration conflicts. The first registration always wins.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Transition {transition} is already registered")]
    DuplicateTransition { transition: String },

    #[error("State '{state}' already has a node")]
    DuplicateNode { state: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn callback_error_keeps_source() {
        let err = CallbackError::with_source(
            "load failed",
            io::Error::new(io::ErrorKind::NotFound, "clip.anim"),
        );
        assert_eq!(err.to_string(), "load failed");
        assert_eq!(err.source().unwrap().to_string(), "clip.anim");
    }

    #[test]
    fn lifecycle_error_names_hook_and_target() {
        let err = LifecycleError::new(Hook::NodeEnter, "'Jumping'", CallbackError::new("boom"));
        assert_eq!(err.to_string(), "on_enter callback failed for 'Jumping': boom");
        assert_eq!(err.source().unwrap().to_string(), "boom");
    }

    #[test]
    fn registration_error_messages() {
        let err = RegistrationError::DuplicateNode {
            state: "Idle".to_string(),
        };
        assert_eq!(err.to_string(), "State 'Idle' already has a node");
    }
}
