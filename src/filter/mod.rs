//! Predicate-based task subset selection.
//!
//! Filters are pure read-only transformations over a task sequence,
//! typically the output of
//! [`TaskStore::list`](crate::task::services::TaskStore::list). The
//! composite applies its parts in sequence, so combining filters narrows
//! by logical AND.

use crate::task::domain::{Task, TaskPriority, TaskStatus};

#[cfg(test)]
mod tests;

/// Contract for selecting a subset of tasks.
pub trait FilterStrategy {
    /// Returns the tasks matching this strategy, preserving input order.
    fn filter(&self, tasks: &[Task]) -> Vec<Task>;
}

/// Keeps tasks in a given workflow status.
#[derive(Debug, Clone, Copy)]
pub struct StatusFilter {
    status: TaskStatus,
}

impl StatusFilter {
    /// Creates a filter for the given status.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self { status }
    }
}

impl FilterStrategy for StatusFilter {
    fn filter(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| task.status() == self.status)
            .cloned()
            .collect()
    }
}

/// Keeps tasks assigned to a given owner.
#[derive(Debug, Clone)]
pub struct AssigneeFilter {
    assignee: String,
}

impl AssigneeFilter {
    /// Creates a filter for the given assignee name.
    #[must_use]
    pub fn new(assignee: impl Into<String>) -> Self {
        Self {
            assignee: assignee.into(),
        }
    }
}

impl FilterStrategy for AssigneeFilter {
    fn filter(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| task.assignee() == Some(self.assignee.as_str()))
            .cloned()
            .collect()
    }
}

/// Keeps tasks of a given priority.
#[derive(Debug, Clone, Copy)]
pub struct PriorityFilter {
    priority: TaskPriority,
}

impl PriorityFilter {
    /// Creates a filter for the given priority.
    #[must_use]
    pub const fn new(priority: TaskPriority) -> Self {
        Self { priority }
    }
}

impl FilterStrategy for PriorityFilter {
    fn filter(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| task.priority() == self.priority)
            .cloned()
            .collect()
    }
}

/// Applies each part in sequence, narrowing the set at every step.
#[derive(Default)]
pub struct CompositeFilter {
    parts: Vec<Box<dyn FilterStrategy>>,
}

impl CompositeFilter {
    /// Creates an empty composite, which keeps everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a part to the sequence.
    #[must_use]
    pub fn with(mut self, part: Box<dyn FilterStrategy>) -> Self {
        self.parts.push(part);
        self
    }
}

impl FilterStrategy for CompositeFilter {
    fn filter(&self, tasks: &[Task]) -> Vec<Task> {
        self.parts
            .iter()
            .fold(tasks.to_vec(), |kept, part| part.filter(&kept))
    }
}
