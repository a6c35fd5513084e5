//! `vpu-task` -- Bounded task slot pool and handoff protocol for the VPU
//! codec pipeline.
//!
//! A codec pipeline runs two stages on independent threads: a software
//! parser producing per-frame syntax, and a hardware stage driving the
//! decode/encode engine. This crate is the relay between them: a
//! [`TaskGroup`] of recyclable slots, each cycling through the five-state
//! life-cycle in [`TaskStatus`](vpu_common::TaskStatus) while carrying an
//! opaque [`TaskPayload`](vpu_common::TaskPayload) from one stage to the
//! other and back.
//!
//! # Architecture
//!
//! ```text
//!  parser stage                        hardware stage
//!  ------------                        --------------
//!  acquire(Idle) ........ h
//!  transition(h, Prepare)
//!  set_payload(h, task)
//!  transition(h, WaitProc) --------->  acquire(WaitProc) ...... h
//!                                      submit to device
//!                                      transition(h, Processing)
//!                                      wait for completion
//!  acquire(ProcDone) .... h <--------  transition(h, ProcDone)
//!  read results, bookkeeping
//!  transition(h, Idle)
//! ```
//!
//! Acquisition never blocks; each stage polls from its own scheduling loop
//! and decides how to wait. Capacity is the only flow control: with every
//! slot in flight, the parser's `acquire(Idle)` keeps returning `NotReady`
//! until the hardware stage catches up.
//!
//! # Module Overview
//!
//! - [`group`]: [`TaskGroup`] (the pool plus the whole protocol) and
//!   [`GroupStats`]
//! - [`handle`]: [`TaskHandle`], the opaque slot identifier
//!
//! ## Usage
//!
//! ```ignore
//! use vpu_common::{DecodeTask, PayloadKind, TaskPayload, TaskStatus};
//! use vpu_task::TaskGroup;
//!
//! let group = TaskGroup::new(PayloadKind::Decode, 4)?;
//!
//! // Parser stage, once per frame:
//! if let Ok(handle) = group.acquire(TaskStatus::Idle) {
//!     group.transition(handle, TaskStatus::Prepare)?;
//!     let mut task = DecodeTask::empty();
//!     // ... fill in syntax and buffer references ...
//!     group.set_payload(handle, TaskPayload::Decode(task))?;
//!     group.transition(handle, TaskStatus::WaitProc)?;
//! }
//! ```

pub mod group;
pub mod handle;

pub use group::{GroupStats, TaskGroup};
pub use handle::TaskHandle;
