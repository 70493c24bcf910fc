//! Activity-log observer on the `log` facade.

use crate::task::domain::{Task, TaskEvent};
use crate::task::ports::{ObserverError, TaskObserver};

/// Logs every task event with its id, title, kind, and mutation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityLog;

impl ActivityLog {
    /// Creates the activity-log observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TaskObserver for ActivityLog {
    fn on_event(&self, task: &Task, event: TaskEvent) -> Result<(), ObserverError> {
        log::info!(
            "task {} '{}' - event: {event} - time: {}",
            task.id(),
            task.title(),
            task.updated_at().format("%Y-%m-%d %H:%M")
        );
        Ok(())
    }
}
