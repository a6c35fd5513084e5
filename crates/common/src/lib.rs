//! `vpu-common` -- Shared types and errors for the VPU codec pipeline.
//!
//! This crate is the vocabulary both pipeline stages speak; the task pool
//! machinery itself lives in `vpu-task`. It defines:
//!
//! - **Status**: `TaskStatus` (the five-state task life-cycle)
//! - **Payloads**: `TaskPayload`, `DecodeTask`, `EncodeTask`, `SyntaxBlock`
//!   (per-frame work descriptions relayed between stages)
//! - **Types**: `BufferSlotIndex`, `BitstreamRef` (opaque references into
//!   caller-owned buffer state)
//! - **Errors**: `TaskError`, `TaskResult` (thiserror-based)

pub mod error;
pub mod payload;
pub mod status;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{TaskError, TaskResult};
pub use payload::{
    DecodeTask, EncodeTask, PayloadKind, SyntaxBlock, TaskPayload, MAX_DECODE_REFS,
};
pub use status::TaskStatus;
pub use types::{BitstreamRef, BufferSlotIndex};
