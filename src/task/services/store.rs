//! In-memory task store with exclusive ownership of all task records.

use super::NotificationBus;
use crate::task::domain::{NewTask, Task, TaskEvent, TaskId, TaskStatus};
use mockable::{Clock, DefaultClock};
use std::collections::BTreeMap;

/// Owner of every task record, keyed by identifier.
///
/// The store is the single mutation path: task mutators are
/// crate-private and only ever called from here, so each mutating
/// operation fires exactly one event on the bus after the mutation is
/// fully applied. Identifiers come from a strictly increasing counter
/// and are never reused, which also makes id order equal insertion
/// order for [`TaskStore::list`].
#[derive(Debug)]
pub struct TaskStore<C: Clock> {
    tasks: BTreeMap<TaskId, Task>,
    next_id: u64,
    bus: NotificationBus,
    clock: C,
}

impl TaskStore<DefaultClock> {
    /// Creates an empty store on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(DefaultClock)
    }
}

impl Default for TaskStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store on the given clock.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
            bus: NotificationBus::new(),
            clock,
        }
    }

    /// Returns the notification bus for read access.
    #[must_use]
    pub const fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    /// Returns the notification bus for observer attachment.
    pub const fn bus_mut(&mut self) -> &mut NotificationBus {
        &mut self.bus
    }

    /// Creates a task, fires [`TaskEvent::Created`], and returns the new
    /// task's snapshot. Inputs are caller-validated; creation never
    /// fails.
    pub fn create(&mut self, new_task: NewTask) -> Task {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        let task = Task::new(id, new_task, &self.clock);
        self.tasks.insert(id, task.clone());
        self.bus.notify(&task, TaskEvent::Created);
        task
    }

    /// Returns a snapshot of the task, or `None` when absent.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.get(&id).cloned()
    }

    /// Returns snapshots of all tasks in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Sets the task's status, fires [`TaskEvent::StatusChanged`], and
    /// returns the post-mutation snapshot; `None` when the task is
    /// absent (no event fires).
    pub fn update_status(&mut self, id: TaskId, status: TaskStatus) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.set_status(status, &self.clock);
        let snapshot = task.clone();
        self.bus.notify(&snapshot, TaskEvent::StatusChanged);
        Some(snapshot)
    }

    /// Sets or clears the task's assignee and fires
    /// [`TaskEvent::AssigneeChanged`]. An empty or whitespace-only name
    /// clears the assignee. Returns `None` when the task is absent.
    pub fn assign(&mut self, id: TaskId, assignee: Option<String>) -> Option<Task> {
        let normalized = assignee.filter(|name| !name.trim().is_empty());
        let task = self.tasks.get_mut(&id)?;
        task.set_assignee(normalized, &self.clock);
        let snapshot = task.clone();
        self.bus.notify(&snapshot, TaskEvent::AssigneeChanged);
        Some(snapshot)
    }

    /// Appends a comment, fires [`TaskEvent::CommentAdded`], and returns
    /// the post-mutation snapshot; `None` when the task is absent.
    pub fn add_comment(
        &mut self,
        id: TaskId,
        text: impl Into<String>,
        author: impl Into<String>,
    ) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.add_comment(text, author, &self.clock);
        let snapshot = task.clone();
        self.bus.notify(&snapshot, TaskEvent::CommentAdded);
        Some(snapshot)
    }

    /// Removes the task, firing [`TaskEvent::Deleted`] with the
    /// pre-removal snapshot. Returns whether the task existed; nothing
    /// fires for an absent id.
    pub fn remove(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).map_or(false, |task| {
            self.bus.notify(&task, TaskEvent::Deleted);
            true
        })
    }
}
