//! Task life-cycle status.
//!
//! Every task slot is always in exactly one of five states and only ever
//! advances around a fixed cycle:
//!
//! ```text
//! Idle -> Prepare -> WaitProc -> Processing -> ProcDone -> Idle
//! ```
//!
//! The first two edges belong to the parser stage, the middle two to the
//! hardware stage, and the last one returns the slot for the next frame.
//! There is no terminal state; slots are recycled for the lifetime of their
//! group.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing status of a task slot.
///
/// [`TaskStatus::successor`] gives the only status a slot may advance to
/// from each state. Which pipeline stage is allowed to act on which status
/// is a convention between the stages, not something this enum enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Not carrying a frame; claimable by the parser stage.
    Idle,
    /// Claimed by the parser stage, payload being populated.
    Prepare,
    /// Fully prepared and published; claimable by the hardware stage.
    WaitProc,
    /// Submitted to the hardware engine.
    Processing,
    /// Hardware finished; awaiting parser-stage bookkeeping.
    ProcDone,
}

impl TaskStatus {
    /// All statuses in cycle order, starting from `Idle`.
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Idle,
        TaskStatus::Prepare,
        TaskStatus::WaitProc,
        TaskStatus::Processing,
        TaskStatus::ProcDone,
    ];

    /// The only status a slot in `self` may advance to.
    pub fn successor(self) -> TaskStatus {
        match self {
            TaskStatus::Idle => TaskStatus::Prepare,
            TaskStatus::Prepare => TaskStatus::WaitProc,
            TaskStatus::WaitProc => TaskStatus::Processing,
            TaskStatus::Processing => TaskStatus::ProcDone,
            TaskStatus::ProcDone => TaskStatus::Idle,
        }
    }

    /// Whether advancing from `self` to `next` follows the cycle.
    pub fn can_advance_to(self, next: TaskStatus) -> bool {
        self.successor() == next
    }

    /// Human-readable status name.
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::Idle => "idle",
            TaskStatus::Prepare => "prepare",
            TaskStatus::WaitProc => "wait_proc",
            TaskStatus::Processing => "processing",
            TaskStatus::ProcDone => "proc_done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_walks_the_full_cycle() {
        let mut status = TaskStatus::Idle;
        for expected in [
            TaskStatus::Prepare,
            TaskStatus::WaitProc,
            TaskStatus::Processing,
            TaskStatus::ProcDone,
            TaskStatus::Idle,
        ] {
            status = status.successor();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn successor_table_is_exact() {
        let allowed = [
            (TaskStatus::Idle, TaskStatus::Prepare),
            (TaskStatus::Prepare, TaskStatus::WaitProc),
            (TaskStatus::WaitProc, TaskStatus::Processing),
            (TaskStatus::Processing, TaskStatus::ProcDone),
            (TaskStatus::ProcDone, TaskStatus::Idle),
        ];
        for from in TaskStatus::ALL {
            for to in TaskStatus::ALL {
                let expected = allowed.contains(&(from, to));
                assert_eq!(from.can_advance_to(to), expected, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn no_status_is_its_own_successor() {
        for status in TaskStatus::ALL {
            assert_ne!(status.successor(), status);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(TaskStatus::Idle.to_string(), "idle");
        assert_eq!(TaskStatus::WaitProc.to_string(), "wait_proc");
        assert_eq!(TaskStatus::ProcDone.to_string(), "proc_done");
    }
}
