//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and the `state_enum!` macro for
//! setting machines up in one expression. Builders are stricter than the
//! machines' own `register` methods: any registration conflict fails the
//! build instead of being logged and skipped.

pub mod error;
pub mod macros;
pub mod node;
pub mod table;

pub use error::BuildError;
pub use node::NodeMachineBuilder;
pub use table::TableMachineBuilder;
