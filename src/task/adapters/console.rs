//! Console notifier observers writing to an injected sink.

use crate::task::domain::{Task, TaskEvent, TaskStatus};
use crate::task::ports::{ObserverError, TaskObserver};
use std::io::Write;
use std::sync::Mutex;

fn poisoned_sink() -> ObserverError {
    ObserverError::Delivery("notification sink poisoned".to_owned())
}

/// Notifies a task's assignee about any event touching their task.
///
/// Stays silent for unassigned tasks.
#[derive(Debug)]
pub struct AssigneeNotifier<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> AssigneeNotifier<W> {
    /// Creates a notifier writing to the given sink.
    #[must_use]
    pub const fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl<W: Write> TaskObserver for AssigneeNotifier<W> {
    fn on_event(&self, task: &Task, event: TaskEvent) -> Result<(), ObserverError> {
        let Some(assignee) = task.assignee() else {
            return Ok(());
        };
        let mut sink = self.sink.lock().map_err(|_| poisoned_sink())?;
        writeln!(
            sink,
            "[NOTIFICATION] {assignee}, task '{}' has been {event}.",
            task.title()
        )?;
        Ok(())
    }
}

/// Notifies the manager about new tasks and completions.
///
/// Reacts to [`TaskEvent::Created`], and to [`TaskEvent::StatusChanged`]
/// when the new status is [`TaskStatus::Done`]; ignores everything else.
#[derive(Debug)]
pub struct ManagerNotifier<W: Write> {
    sink: Mutex<W>,
}

impl<W: Write> ManagerNotifier<W> {
    /// Creates a notifier writing to the given sink.
    #[must_use]
    pub const fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }
}

impl<W: Write> TaskObserver for ManagerNotifier<W> {
    fn on_event(&self, task: &Task, event: TaskEvent) -> Result<(), ObserverError> {
        let message = match event {
            TaskEvent::Created => format!("New task created: '{}'", task.title()),
            TaskEvent::StatusChanged if task.status() == TaskStatus::Done => format!(
                "Task '{}' has been marked as completed and requires review.",
                task.title()
            ),
            _ => return Ok(()),
        };
        let mut sink = self.sink.lock().map_err(|_| poisoned_sink())?;
        writeln!(sink, "[MANAGER NOTIFICATION] {message}")?;
        Ok(())
    }
}
