//! Scoped in-progress flag.

use std::cell::Cell;

/// Holds a machine's in-progress flag raised for as long as it lives.
///
/// The flag is lowered on drop, so it is released on every exit path of a
/// transition: normal return, `?` propagation and panic unwinding.
pub(crate) struct ProgressGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> ProgressGuard<'a> {
    pub(crate) fn acquire(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
