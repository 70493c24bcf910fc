//! Reversible commands over the task store and their undo history.

use super::TaskStore;
use crate::task::domain::{NewTask, TaskId, TaskStatus};
use mockable::Clock;

/// A reversible unit of user-initiated mutation.
///
/// A command moves through Created, Executed, and optionally Undone. It
/// is only reachable for undo while it sits on top of the invoker's
/// history stack; once another command executes, or once it has been
/// undone, it is discarded for good.
pub trait Command<C: Clock> {
    /// Applies the forward action against the store.
    fn execute(&mut self, store: &mut TaskStore<C>);

    /// Reverses the forward action using the state captured during
    /// [`Command::execute`].
    fn undo(&mut self, store: &mut TaskStore<C>);
}

/// Creates a task; undo deletes it by the captured id.
#[derive(Debug, Clone)]
pub struct CreateTask {
    new_task: NewTask,
    created_id: Option<TaskId>,
}

impl CreateTask {
    /// Wraps a new-task request as a reversible creation.
    #[must_use]
    pub const fn new(new_task: NewTask) -> Self {
        Self {
            new_task,
            created_id: None,
        }
    }

    /// Returns the id allocated by the last execution, if any.
    #[must_use]
    pub const fn created_id(&self) -> Option<TaskId> {
        self.created_id
    }
}

impl<C: Clock> Command<C> for CreateTask {
    fn execute(&mut self, store: &mut TaskStore<C>) {
        self.created_id = Some(store.create(self.new_task.clone()).id());
    }

    /// Removes the created task. A no-op when execute never ran or the
    /// task was already removed; the captured id is cleared either way.
    fn undo(&mut self, store: &mut TaskStore<C>) {
        if let Some(id) = self.created_id.take() {
            store.remove(id);
        }
    }
}

/// Changes a task's status; undo restores the captured prior status.
#[derive(Debug, Clone)]
pub struct UpdateStatus {
    id: TaskId,
    status: TaskStatus,
    previous: Option<TaskStatus>,
}

impl UpdateStatus {
    /// Wraps a status change as a reversible command.
    #[must_use]
    pub const fn new(id: TaskId, status: TaskStatus) -> Self {
        Self {
            id,
            status,
            previous: None,
        }
    }
}

impl<C: Clock> Command<C> for UpdateStatus {
    fn execute(&mut self, store: &mut TaskStore<C>) {
        self.previous = store.get(self.id).map(|task| task.status());
        if self.previous.is_some() {
            store.update_status(self.id, self.status);
        }
    }

    /// Restores the prior status only when execute found the task and
    /// captured one; otherwise a no-op.
    fn undo(&mut self, store: &mut TaskStore<C>) {
        if let Some(previous) = self.previous {
            store.update_status(self.id, previous);
        }
    }
}

/// Reassigns a task; undo restores the captured prior assignee.
#[derive(Debug, Clone)]
pub struct AssignTask {
    id: TaskId,
    assignee: Option<String>,
    previous: Option<String>,
}

impl AssignTask {
    /// Wraps an assignee change as a reversible command. `None` clears
    /// the assignee.
    #[must_use]
    pub const fn new(id: TaskId, assignee: Option<String>) -> Self {
        Self {
            id,
            assignee,
            previous: None,
        }
    }
}

impl<C: Clock> Command<C> for AssignTask {
    fn execute(&mut self, store: &mut TaskStore<C>) {
        if let Some(task) = store.get(self.id) {
            self.previous = task.assignee().map(str::to_owned);
            store.assign(self.id, self.assignee.clone());
        }
    }

    /// Re-invokes assign with the captured prior assignee,
    /// unconditionally: unlike [`UpdateStatus`], there is no
    /// found-at-execute guard, so when execute found no task this still
    /// clears the assignee of whichever task holds the id at undo time.
    /// See DESIGN.md for the decision record.
    fn undo(&mut self, store: &mut TaskStore<C>) {
        store.assign(self.id, self.previous.clone());
    }
}

/// Linear history stack supporting undo of the most recent command.
pub struct CommandInvoker<C: Clock> {
    history: Vec<Box<dyn Command<C>>>,
}

impl<C: Clock> CommandInvoker<C> {
    /// Creates an invoker with empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Returns the number of commands on the history stack.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Runs the command's forward action, then pushes it onto history.
    ///
    /// The command is recorded even when the forward action had no
    /// visible effect (such as updating the status of a nonexistent
    /// task).
    pub fn execute(&mut self, mut command: Box<dyn Command<C>>, store: &mut TaskStore<C>) {
        command.execute(store);
        self.history.push(command);
    }

    /// Pops and reverses the most recently executed command.
    ///
    /// Returns `false`, with no state change, when the history is
    /// empty. A popped command is discarded; there is no redo.
    pub fn undo_last(&mut self, store: &mut TaskStore<C>) -> bool {
        self.history.pop().map_or_else(
            || {
                log::debug!("undo requested with empty history");
                false
            },
            |mut command| {
                command.undo(store);
                true
            },
        )
    }
}

impl<C: Clock> Default for CommandInvoker<C> {
    fn default() -> Self {
        Self::new()
    }
}
