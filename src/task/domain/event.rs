//! Event kinds broadcast to observers after each store mutation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag delivered with the task snapshot on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskEvent {
    /// A task was created in the store.
    Created,
    /// A task's status changed.
    StatusChanged,
    /// A task's assignee changed (including being cleared).
    AssigneeChanged,
    /// A comment was appended to a task.
    CommentAdded,
    /// A task was removed; the snapshot carries its last known state.
    Deleted,
}

impl TaskEvent {
    /// Returns the canonical event-kind tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::StatusChanged => "status_changed",
            Self::AssigneeChanged => "assignee_changed",
            Self::CommentAdded => "comment_added",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for TaskEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
