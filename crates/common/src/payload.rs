//! Task payloads relayed between the parser and hardware stages.
//!
//! A payload is plain data: a syntax block produced by the parser plus
//! buffer-slot references handed out by the external allocator. The task
//! core copies these structs in and out of slots and never looks inside.
//! Each task group fixes one payload kind at creation; decode and encode
//! tasks never share a group.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{BitstreamRef, BufferSlotIndex};

/// Largest reference-picture set any supported codec requires (a full H.264
/// DPB plus the current picture).
pub const MAX_DECODE_REFS: usize = 17;

/// Which payload shape a task group carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    /// Slots carry [`DecodeTask`]s.
    Decode,
    /// Slots carry [`EncodeTask`]s.
    Encode,
}

impl PayloadKind {
    /// Human-readable kind name.
    pub fn display_name(&self) -> &'static str {
        match self {
            PayloadKind::Decode => "decode",
            PayloadKind::Encode => "encode",
        }
    }
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Syntax element block produced by the parser for the hardware engine.
///
/// `data` is the host address of the element array. It is opaque here and
/// never dereferenced; keeping the pointed-to memory alive while the task is
/// in flight is the parser's responsibility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SyntaxBlock {
    /// Number of syntax elements at `data`.
    pub count: u32,
    /// Opaque address of the element array.
    pub data: u64,
}

/// One frame's worth of decode work.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodeTask {
    /// Syntax elements describing the frame.
    pub syntax: SyntaxBlock,
    /// Compressed input bitstream buffer.
    pub bitstream: BitstreamRef,
    /// Buffer slot receiving the decoded picture.
    pub output: BufferSlotIndex,
    /// Reference pictures this frame predicts from; entries not needed this
    /// cycle hold [`BufferSlotIndex::UNUSED`].
    pub refs: [BufferSlotIndex; MAX_DECODE_REFS],
}

impl DecodeTask {
    /// A decode task referencing nothing: no bitstream, every index unused.
    pub fn empty() -> Self {
        Self {
            syntax: SyntaxBlock::default(),
            bitstream: BitstreamRef::NONE,
            output: BufferSlotIndex::UNUSED,
            refs: [BufferSlotIndex::UNUSED; MAX_DECODE_REFS],
        }
    }

    /// Reference indices actually in use this cycle.
    pub fn used_refs(&self) -> impl Iterator<Item = BufferSlotIndex> + '_ {
        self.refs.iter().copied().filter(BufferSlotIndex::is_used)
    }
}

impl Default for DecodeTask {
    fn default() -> Self {
        Self::empty()
    }
}

/// One frame's worth of encode work.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodeTask {
    /// Syntax elements describing the frame.
    pub syntax: SyntaxBlock,
    /// Stream buffer receiving the encoded bitstream.
    pub output: BufferSlotIndex,
    /// Picture slot holding the raw input frame.
    pub input: BufferSlotIndex,
    /// Reference picture to predict from.
    pub reference: BufferSlotIndex,
    /// Picture slot receiving the reconstructed frame.
    pub recon: BufferSlotIndex,
}

impl EncodeTask {
    /// An encode task referencing nothing.
    pub fn empty() -> Self {
        Self {
            syntax: SyntaxBlock::default(),
            output: BufferSlotIndex::UNUSED,
            input: BufferSlotIndex::UNUSED,
            reference: BufferSlotIndex::UNUSED,
            recon: BufferSlotIndex::UNUSED,
        }
    }
}

impl Default for EncodeTask {
    fn default() -> Self {
        Self::empty()
    }
}

/// Payload carried by a task slot: exactly one of the two task shapes.
///
/// The kind is chosen when a group is created and never changes; a group
/// rejects payloads of the other kind instead of reinterpreting them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaskPayload {
    /// Decode work.
    Decode(DecodeTask),
    /// Encode work.
    Encode(EncodeTask),
}

impl TaskPayload {
    /// A fresh payload of `kind` with every reference index unused.
    pub fn empty(kind: PayloadKind) -> Self {
        match kind {
            PayloadKind::Decode => TaskPayload::Decode(DecodeTask::empty()),
            PayloadKind::Encode => TaskPayload::Encode(EncodeTask::empty()),
        }
    }

    /// The shape this payload carries.
    pub fn kind(&self) -> PayloadKind {
        match self {
            TaskPayload::Decode(_) => PayloadKind::Decode,
            TaskPayload::Encode(_) => PayloadKind::Encode,
        }
    }

    /// The decode task, if this is a decode payload.
    pub fn as_decode(&self) -> Option<&DecodeTask> {
        match self {
            TaskPayload::Decode(task) => Some(task),
            TaskPayload::Encode(_) => None,
        }
    }

    /// The encode task, if this is an encode payload.
    pub fn as_encode(&self) -> Option<&EncodeTask> {
        match self {
            TaskPayload::Encode(task) => Some(task),
            TaskPayload::Decode(_) => None,
        }
    }
}
