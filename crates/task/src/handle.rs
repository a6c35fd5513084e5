//! Opaque task slot handles.

use std::fmt;

/// Identifier for one slot within a [`TaskGroup`](crate::TaskGroup).
///
/// Handles are minted by `acquire` and stay valid for the lifetime of the
/// group; the parser and hardware stages observe the same handle for the
/// same slot, so a slot is handed over by advancing its status, never by
/// passing the handle around.
///
/// A handle carries no ownership by itself: it may be freely copied, and
/// holding one does not keep the slot claimed. A handle taken from a
/// different group is only caught when its slot number falls outside this
/// group's range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u32);

impl TaskHandle {
    /// Handle for the slot at `index`. Only the pool mints these.
    pub(crate) fn new(index: usize) -> Self {
        TaskHandle(index as u32)
    }

    /// Position of the addressed slot in the group's array.
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_compare_by_slot() {
        assert_eq!(TaskHandle::new(2), TaskHandle::new(2));
        assert_ne!(TaskHandle::new(2), TaskHandle::new(3));
    }

    #[test]
    fn display_shows_slot_number() {
        assert_eq!(TaskHandle::new(7).to_string(), "T7");
    }
}
