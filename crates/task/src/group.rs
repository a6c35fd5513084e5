//! Task slot pool -- fixed set of recyclable slots relaying work between
//! the parser and hardware stages.
//!
//! A [`TaskGroup`] owns `slot_count` slots for one codec instance. The
//! parser stage acquires an idle slot, fills in a payload, and publishes it
//! to the hardware stage by advancing its status; the hardware stage does
//! the same in the other direction. Slots are never created or destroyed
//! after group creation. Capacity is the pipeline's only flow control:
//! when no idle slot is left the parser must stall until a frame completes
//! the cycle.
//!
//! All operations take `&self` and are safe to call from both stages
//! concurrently. A single `parking_lot::Mutex` over the slot array makes
//! each scan-and-claim and each status write atomic; the lock is held only
//! for the scan or the copy, never across caller work.

use parking_lot::Mutex;
use tracing::debug;

use vpu_common::{PayloadKind, TaskError, TaskPayload, TaskResult, TaskStatus};

use crate::handle::TaskHandle;

/// One pool entry.
struct TaskSlot {
    /// Where this slot is in the life-cycle; written only by `transition`.
    status: TaskStatus,
    /// True once the owning stage finished writing the payload this cycle.
    valid: bool,
    /// True between an `acquire` and the next `transition`; keeps a second
    /// scan for the same status from handing out the same slot.
    claimed: bool,
    /// The relayed work description; copied in and out, never interpreted.
    payload: TaskPayload,
}

impl TaskSlot {
    fn new(kind: PayloadKind) -> Self {
        Self {
            status: TaskStatus::Idle,
            valid: false,
            claimed: false,
            payload: TaskPayload::empty(kind),
        }
    }
}

/// Fixed-capacity pool of task slots shared by one codec pipeline instance.
///
/// The group is homogeneous: every slot carries the payload kind chosen at
/// creation. Both pipeline stages address slots through [`TaskHandle`]s and
/// the protocol calls ([`acquire`](Self::acquire),
/// [`transition`](Self::transition), [`set_payload`](Self::set_payload),
/// [`get_payload`](Self::get_payload)); fresh payloads are built with
/// [`TaskPayload::empty`](vpu_common::TaskPayload::empty) before being
/// written in.
///
/// # Ownership convention
///
/// Acquiring a slot grants *logical* ownership: until the caller advances
/// the slot's status, no other `acquire` returns that slot, and by
/// convention only the owner touches its payload. The group does not record
/// which thread owns what -- a caller that transitions or writes through a
/// handle it never acquired is not stopped. Each stage must act only on the
/// statuses it is responsible for: the parser on `Idle` and `ProcDone`, the
/// hardware stage on `WaitProc`.
///
/// Dropping the group releases all slot storage. Handles are plain slot
/// numbers and cannot keep the group alive; the surrounding pipeline must
/// stop both stages (or call [`reset`](Self::reset) and drain) before the
/// group goes away.
pub struct TaskGroup {
    /// Payload shape every slot in this group carries.
    kind: PayloadKind,
    /// Number of slots; fixed at creation, bounds in-flight frames.
    capacity: usize,
    /// Slot storage behind the group lock.
    slots: Mutex<Box<[TaskSlot]>>,
}

impl TaskGroup {
    /// Create a group of `slot_count` slots, all `Idle`, carrying `kind`
    /// payloads.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidArgument`] if `slot_count` is zero; a
    /// group with no slots could never accept work.
    pub fn new(kind: PayloadKind, slot_count: usize) -> TaskResult<Self> {
        if slot_count == 0 {
            return Err(TaskError::InvalidArgument(
                "task group needs at least one slot".to_string(),
            ));
        }

        let slots: Box<[TaskSlot]> = (0..slot_count).map(|_| TaskSlot::new(kind)).collect();

        debug!(kind = %kind, slots = slot_count, "Created task group");

        Ok(Self {
            kind,
            capacity: slot_count,
            slots: Mutex::new(slots),
        })
    }

    /// Claim the lowest-index slot currently in `status`.
    ///
    /// On success the caller holds logical ownership of the slot until its
    /// next [`transition`](Self::transition); no other `acquire` returns
    /// this slot in the meantime. Selection among several matching slots is
    /// by slot index, not by how long a slot has been waiting.
    ///
    /// Never blocks or sleeps: if nothing matches, the call returns
    /// immediately and the caller's scheduling loop decides whether to
    /// spin, wait, or give up.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotReady`] if no unclaimed slot currently holds
    /// `status`.
    pub fn acquire(&self, status: TaskStatus) -> TaskResult<TaskHandle> {
        let mut slots = self.slots.lock();
        match Self::find_by_status(&slots, status) {
            Some(index) => {
                slots[index].claimed = true;
                Ok(TaskHandle::new(index))
            }
            None => Err(TaskError::NotReady(status)),
        }
    }

    /// Advance the slot's status to `next`.
    ///
    /// Only the immediate successor in the cycle is accepted; skips and
    /// reversals are rejected and leave the slot untouched. A successful
    /// transition is the publication point: it releases the claim taken by
    /// `acquire`, and the new status is visible to any subsequent `acquire`
    /// on any thread. Returning a slot to `Idle` also clears its
    /// payload-valid flag, so the next cycle starts without a stale claim
    /// of a populated payload.
    ///
    /// # Errors
    ///
    /// * [`TaskError::NotFound`] if `handle` does not address a slot in
    ///   this group.
    /// * [`TaskError::InvalidTransition`] if `next` is not the successor of
    ///   the slot's current status.
    pub fn transition(&self, handle: TaskHandle, next: TaskStatus) -> TaskResult<()> {
        let mut slots = self.slots.lock();
        let slot = Self::slot_mut(&mut slots, handle)?;

        if !slot.status.can_advance_to(next) {
            return Err(TaskError::InvalidTransition {
                from: slot.status,
                to: next,
            });
        }

        slot.status = next;
        slot.claimed = false;
        if next == TaskStatus::Idle {
            slot.valid = false;
        }
        Ok(())
    }

    /// Copy `payload` into the slot and mark the slot's payload valid.
    ///
    /// Legal only while the caller logically owns the slot (between its own
    /// `acquire` and `transition`); the group checks the payload kind, not
    /// the caller.
    ///
    /// # Errors
    ///
    /// * [`TaskError::NotFound`] if `handle` does not address a slot in
    ///   this group.
    /// * [`TaskError::InvalidArgument`] if `payload` is not the group's
    ///   kind.
    pub fn set_payload(&self, handle: TaskHandle, payload: TaskPayload) -> TaskResult<()> {
        let mut slots = self.slots.lock();
        let slot = Self::slot_mut(&mut slots, handle)?;

        if payload.kind() != self.kind {
            return Err(TaskError::kind_mismatch(self.kind, payload.kind()));
        }

        slot.payload = payload;
        slot.valid = true;
        Ok(())
    }

    /// Copy the slot's current payload out.
    ///
    /// Returns whatever the slot holds, whether or not it was marked valid
    /// this cycle; pair with [`payload_valid`](Self::payload_valid) when
    /// that distinction matters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if `handle` does not address a slot
    /// in this group.
    pub fn get_payload(&self, handle: TaskHandle) -> TaskResult<TaskPayload> {
        let slots = self.slots.lock();
        Self::slot_ref(&slots, handle).map(|slot| slot.payload)
    }

    /// Current status of the addressed slot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if `handle` does not address a slot
    /// in this group.
    pub fn status(&self, handle: TaskHandle) -> TaskResult<TaskStatus> {
        let slots = self.slots.lock();
        Self::slot_ref(&slots, handle).map(|slot| slot.status)
    }

    /// Whether the slot's payload was written this cycle.
    ///
    /// Lets a defensive consumer distinguish "status says ready" from
    /// "payload fully populated" before trusting the contents.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if `handle` does not address a slot
    /// in this group.
    pub fn payload_valid(&self, handle: TaskHandle) -> TaskResult<bool> {
        let slots = self.slots.lock();
        Self::slot_ref(&slots, handle).map(|slot| slot.valid)
    }

    /// Payload kind every slot in this group carries.
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Number of slots; the hard bound on in-flight frames.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the current slot distribution.
    pub fn stats(&self) -> GroupStats {
        let slots = self.slots.lock();
        let mut stats = GroupStats {
            capacity: self.capacity,
            ..GroupStats::default()
        };
        for slot in slots.iter() {
            match slot.status {
                TaskStatus::Idle => stats.idle += 1,
                TaskStatus::Prepare => stats.prepare += 1,
                TaskStatus::WaitProc => stats.wait_proc += 1,
                TaskStatus::Processing => stats.processing += 1,
                TaskStatus::ProcDone => stats.proc_done += 1,
            }
            if slot.claimed {
                stats.claimed += 1;
            }
        }
        stats
    }

    /// Force every slot back to `Idle` with a fresh payload.
    ///
    /// Teardown and recovery aid for the surrounding pipeline. The caller
    /// must guarantee neither stage still acts on a previously acquired
    /// handle; the group cannot check that.
    pub fn reset(&self) {
        let mut slots = self.slots.lock();
        for slot in slots.iter_mut() {
            *slot = TaskSlot::new(self.kind);
        }
        debug!(kind = %self.kind, slots = self.capacity, "Reset task group to idle");
    }

    // ── internal helpers ──────────────────────────────────────────

    /// Lowest-index slot currently in `status` and not claimed by a prior
    /// `acquire`. The scan primitive everything builds on.
    fn find_by_status(slots: &[TaskSlot], status: TaskStatus) -> Option<usize> {
        slots
            .iter()
            .position(|slot| slot.status == status && !slot.claimed)
    }

    fn slot_ref(slots: &[TaskSlot], handle: TaskHandle) -> TaskResult<&TaskSlot> {
        slots.get(handle.index()).ok_or(TaskError::NotFound)
    }

    fn slot_mut(slots: &mut [TaskSlot], handle: TaskHandle) -> TaskResult<&mut TaskSlot> {
        slots.get_mut(handle.index()).ok_or(TaskError::NotFound)
    }
}

impl std::fmt::Debug for TaskGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("TaskGroup")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity)
            .field("idle", &stats.idle)
            .field("in_flight", &stats.in_flight())
            .finish()
    }
}

/// Snapshot of a group's slot distribution.
///
/// Produced by [`TaskGroup::stats`]; scheduling loops use it to decide
/// whether to parse ahead, drain completions, or stall.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupStats {
    /// Total slot count.
    pub capacity: usize,
    /// Slots waiting for the parser to claim them.
    pub idle: usize,
    /// Slots being populated by the parser.
    pub prepare: usize,
    /// Slots published to the hardware stage.
    pub wait_proc: usize,
    /// Slots submitted to the hardware engine.
    pub processing: usize,
    /// Slots with finished work awaiting parser bookkeeping.
    pub proc_done: usize,
    /// Slots between an `acquire` and the following `transition`.
    pub claimed: usize,
}

impl GroupStats {
    /// Slots anywhere past `Idle`, i.e. frames currently in flight.
    pub fn in_flight(&self) -> usize {
        self.capacity - self.idle
    }
}

// ── Tests ────────────────────────────────────────────────────────────
