//! Buffer reference newtypes shared across the pipeline.
//!
//! The task core stores these values opaquely: it never dereferences a
//! bitstream address and never validates a slot index against the external
//! allocator that owns the underlying memory.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a picture or stream buffer slot owned by the external buffer
/// allocator.
///
/// [`BufferSlotIndex::UNUSED`] marks a reference not in use this cycle; any
/// non-negative value names an allocator slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferSlotIndex(pub i32);

impl BufferSlotIndex {
    /// Sentinel for "no buffer referenced".
    pub const UNUSED: Self = Self(-1);

    /// Whether this index names an allocator slot.
    pub fn is_used(&self) -> bool {
        self.0 >= 0
    }
}

impl Default for BufferSlotIndex {
    fn default() -> Self {
        Self::UNUSED
    }
}

impl fmt::Display for BufferSlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_used() {
            write!(f, "B{}", self.0)
        } else {
            write!(f, "unused")
        }
    }
}

/// Opaque reference to a bitstream input buffer owned by the caller.
///
/// Carried through decode payloads untouched; zero means no buffer attached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct BitstreamRef(pub u64);

impl BitstreamRef {
    /// No bitstream buffer attached.
    pub const NONE: Self = Self(0);
}

impl fmt::Display for BitstreamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unused_sentinel_is_negative() {
        assert_eq!(BufferSlotIndex::UNUSED.0, -1);
        assert!(!BufferSlotIndex::UNUSED.is_used());
    }

    #[test]
    fn non_negative_indices_are_used() {
        assert!(BufferSlotIndex(0).is_used());
        assert!(BufferSlotIndex(16).is_used());
    }

    #[test]
    fn default_index_is_unused() {
        assert_eq!(BufferSlotIndex::default(), BufferSlotIndex::UNUSED);
    }

    #[test]
    fn buffer_slot_display() {
        assert_eq!(BufferSlotIndex(3).to_string(), "B3");
        assert_eq!(BufferSlotIndex::UNUSED.to_string(), "unused");
    }

    #[test]
    fn default_bitstream_ref_is_none() {
        assert_eq!(BitstreamRef::default(), BitstreamRef::NONE);
        assert_eq!(BitstreamRef(0x1000).to_string(), "0x1000");
    }
}
