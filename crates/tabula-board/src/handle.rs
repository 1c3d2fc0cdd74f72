//! Stable handles into the element pool arena.

use std::fmt;

/// Index of a pool entry inside the board's arena.
///
/// Pool entries are never removed, so a handle stays valid for the whole
/// lifetime of the board that minted it. Handles never leave the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EntryHandle(usize);

impl EntryHandle {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EntryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
