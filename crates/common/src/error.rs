//! Task protocol error types (thiserror-based).
//!
//! Every failure surfaces as a [`TaskError`] return value; the task core
//! never panics on protocol misuse and never logs. [`TaskError::NotReady`]
//! is the one error expected during normal operation: it tells a polling
//! stage that nothing is available yet and carries no blame.

use thiserror::Error;

use crate::payload::PayloadKind;
use crate::status::TaskStatus;

/// Errors returned by task group operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TaskError {
    /// Construction or payload parameters were rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No slot currently holds the requested status. Expected under normal
    /// operation; callers poll again or stall.
    #[error("No task slot in {0} status")]
    NotReady(TaskStatus),

    /// The requested status is not the immediate successor of the current
    /// one. Signals a caller logic bug, not a transient condition.
    #[error("Invalid status transition {from} -> {to}")]
    InvalidTransition { from: TaskStatus, to: TaskStatus },

    /// The handle does not address a slot in this group.
    #[error("Unknown task handle")]
    NotFound,
}

impl TaskError {
    /// The rejection a group returns when a payload of the wrong shape is
    /// written to it.
    pub fn kind_mismatch(expected: PayloadKind, got: PayloadKind) -> Self {
        TaskError::InvalidArgument(format!(
            "payload kind {got} does not match group kind {expected}"
        ))
    }

    /// Whether this is the recoverable "nothing available yet" error.
    ///
    /// Retry loops key off this instead of pattern matching at every call
    /// site; all other errors indicate misuse and should stop the loop.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, TaskError::NotReady(_))
    }
}

/// Convenience alias for task protocol results.
pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_display_names_the_status() {
        let err = TaskError::NotReady(TaskStatus::WaitProc);
        assert!(err.to_string().contains("wait_proc"));
    }

    #[test]
    fn invalid_transition_display_names_both_statuses() {
        let err = TaskError::InvalidTransition {
            from: TaskStatus::Idle,
            to: TaskStatus::Processing,
        };
        let msg = err.to_string();
        assert!(msg.contains("idle"));
        assert!(msg.contains("processing"));
    }

    #[test]
    fn kind_mismatch_display_names_both_kinds() {
        let err = TaskError::kind_mismatch(PayloadKind::Decode, PayloadKind::Encode);
        let msg = err.to_string();
        assert!(msg.contains("decode"));
        assert!(msg.contains("encode"));
    }

    #[test]
    fn only_not_ready_is_retryable() {
        assert!(TaskError::NotReady(TaskStatus::Idle).is_not_ready());
        assert!(!TaskError::NotFound.is_not_ready());
        assert!(!TaskError::InvalidArgument("x".to_string()).is_not_ready());
        assert!(!TaskError::InvalidTransition {
            from: TaskStatus::Idle,
            to: TaskStatus::Idle,
        }
        .is_not_ready());
    }
}
