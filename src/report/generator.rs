//! Report generators over the filter → sort → render pipeline.

use crate::task::domain::{Task, TaskPriority, TaskStatus};
use std::collections::BTreeMap;

const ALL_STATUSES: [TaskStatus; 4] = [
    TaskStatus::ToDo,
    TaskStatus::InProgress,
    TaskStatus::Review,
    TaskStatus::Done,
];

const PRIORITIES_HIGH_FIRST: [TaskPriority; 4] = [
    TaskPriority::Critical,
    TaskPriority::High,
    TaskPriority::Medium,
    TaskPriority::Low,
];

/// Contract for producing a formatted text report from a task sequence.
///
/// [`ReportGenerator::generate`] is the fixed pipeline; generators
/// override [`ReportGenerator::filter`] and [`ReportGenerator::sort`]
/// where the defaults (keep everything, order by id) do not fit.
pub trait ReportGenerator {
    /// Runs the fixed filter → sort → render pipeline.
    fn generate(&self, tasks: &[Task]) -> String {
        let kept = self.filter(tasks);
        let sorted = self.sort(kept);
        self.render(&sorted)
    }

    /// Selects the tasks the report covers. Defaults to all of them.
    fn filter(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.to_vec()
    }

    /// Orders the selected tasks. Defaults to id order.
    fn sort(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by_key(Task::id);
        tasks
    }

    /// Renders the selected, ordered tasks as text.
    fn render(&self, tasks: &[Task]) -> String;
}

/// Counts tasks per workflow status.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusReport;

impl ReportGenerator for StatusReport {
    fn render(&self, tasks: &[Task]) -> String {
        let mut lines = vec![
            "=== STATUS REPORT ===".to_owned(),
            format!("Total tasks: {}", tasks.len()),
            String::new(),
            "Task status breakdown:".to_owned(),
        ];
        for status in ALL_STATUSES {
            let count = tasks.iter().filter(|task| task.status() == status).count();
            if count > 0 {
                lines.push(format!("  {status}: {count} tasks"));
            }
        }
        lines.join("\n")
    }
}

/// Groups assigned tasks by their owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssigneeReport;

impl ReportGenerator for AssigneeReport {
    /// Keeps only tasks that have an assignee.
    fn filter(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| task.assignee().is_some())
            .cloned()
            .collect()
    }

    /// Orders by assignee, then id.
    fn sort(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by(|a, b| {
            (a.assignee(), a.id()).cmp(&(b.assignee(), b.id()))
        });
        tasks
    }

    fn render(&self, tasks: &[Task]) -> String {
        let mut by_assignee: BTreeMap<&str, Vec<&Task>> = BTreeMap::new();
        for task in tasks {
            if let Some(assignee) = task.assignee() {
                by_assignee.entry(assignee).or_default().push(task);
            }
        }

        let mut lines = vec!["=== ASSIGNEE WORKLOAD REPORT ===".to_owned()];
        for (assignee, owned) in &by_assignee {
            lines.push(String::new());
            lines.push(format!("{assignee} - {} tasks:", owned.len()));
            for task in owned {
                lines.push(format!(
                    "  - Task {}: {} [{}]",
                    task.id(),
                    task.title(),
                    task.status()
                ));
            }
        }
        lines.join("\n")
    }
}

/// Groups tasks by priority, highest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityReport;

impl ReportGenerator for PriorityReport {
    /// Orders by priority rank (highest first), then id.
    fn sort(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by_key(|task| (task.priority().rank(), task.id()));
        tasks
    }

    fn render(&self, tasks: &[Task]) -> String {
        let mut lines = vec!["=== PRIORITY REPORT ===".to_owned()];
        for priority in PRIORITIES_HIGH_FIRST {
            let group: Vec<&Task> = tasks
                .iter()
                .filter(|task| task.priority() == priority)
                .collect();
            if group.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(format!("{priority} Priority - {} tasks:", group.len()));
            for task in group {
                let assignee = task.assignee().unwrap_or("Unassigned");
                lines.push(format!(
                    "  - Task {}: {} [{}] - {assignee}",
                    task.id(),
                    task.title(),
                    task.status()
                ));
            }
        }
        lines.join("\n")
    }
}

/// Serializes the task list as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportReport;

impl ReportGenerator for ExportReport {
    fn render(&self, tasks: &[Task]) -> String {
        serde_json::to_string_pretty(tasks)
            .unwrap_or_else(|err| format!("export failed: {err}"))
    }
}
