//! State identifiers.
//!
//! A state identifier is an opaque value naming a state. The core never looks
//! inside it: it only clones, compares, hashes and prints identifiers.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values that name a state.
///
/// Blanket-implemented for every type that is `Clone + Eq + Hash + Debug`,
/// so enums, integers and `&'static str` all work without extra code.
///
/// # Required Traits
///
/// - `Clone`: identifiers are copied into transitions and history
/// - `Eq` + `Hash`: identifiers key the registries of both machines
/// - `Debug`: identifiers appear in log messages and errors
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateId;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn describe<S: StateId>(state: &S) -> String {
///     format!("{state:?}")
/// }
///
/// assert_eq!(describe(&Door::Open), "Open");
/// assert_eq!(describe(&3u8), "3");
/// ```
pub trait StateId: Clone + Eq + Hash + Debug + 'static {}

impl<T> StateId for T where T: Clone + Eq + Hash + Debug + 'static {}

/// Render an identifier for log lines and error payloads.
pub(crate) fn describe<S: StateId>(state: &S) -> String {
    format!("{state:?}")
}
