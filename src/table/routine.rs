//! Long-running per-transition routines.
//!
//! A routine is a `stillwater` effect produced fresh by a factory every time
//! its transition becomes active. The machine only binds it; an external
//! runner takes it with `TableMachine::take_routine` and awaits it against an
//! environment value.

use crate::core::CallbackError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// A bound routine, ready to be run with `routine.run(&env).await`.
pub type Routine<Env> = BoxedEffect<(), CallbackError, Env>;

/// Factory creating a fresh routine on each activation of its transition.
pub type RoutineFactory<Env> = Arc<dyn Fn() -> Routine<Env> + Send + Sync>;
