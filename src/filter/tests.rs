//! Filter strategy tests.

use super::{AssigneeFilter, CompositeFilter, FilterStrategy, PriorityFilter, StatusFilter};
use crate::task::domain::{NewTask, Task, TaskId, TaskPriority, TaskStatus};
use crate::task::services::TaskStore;
use rstest::{fixture, rstest};

#[fixture]
fn tasks() -> Vec<Task> {
    let mut store = TaskStore::new();
    store.create(
        NewTask::new("Login", "d")
            .with_assignee("alex")
            .with_priority(TaskPriority::High),
    );
    store.create(NewTask::new("Schema", "d").with_assignee("maria"));
    store.create(
        NewTask::new("Hotfix", "d")
            .with_assignee("alex")
            .with_priority(TaskPriority::Critical),
    );
    store.create(NewTask::new("Docs", "d").with_priority(TaskPriority::Low));
    store.update_status(TaskId::new(2), TaskStatus::InProgress);
    store.update_status(TaskId::new(4), TaskStatus::Done);
    store.list()
}

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

#[rstest]
fn status_filter_keeps_matching_tasks(tasks: Vec<Task>) {
    let kept = StatusFilter::new(TaskStatus::ToDo).filter(&tasks);
    assert_eq!(ids(&kept), vec![1, 3]);
}

#[rstest]
fn assignee_filter_keeps_owned_tasks_in_order(tasks: Vec<Task>) {
    let kept = AssigneeFilter::new("alex").filter(&tasks);
    assert_eq!(ids(&kept), vec![1, 3]);
}

#[rstest]
fn assignee_filter_ignores_unassigned_tasks(tasks: Vec<Task>) {
    let kept = AssigneeFilter::new("nobody").filter(&tasks);
    assert!(kept.is_empty());
}

#[rstest]
fn priority_filter_keeps_matching_tasks(tasks: Vec<Task>) {
    let kept = PriorityFilter::new(TaskPriority::Critical).filter(&tasks);
    assert_eq!(ids(&kept), vec![3]);
}

#[rstest]
fn composite_narrows_by_logical_and(tasks: Vec<Task>) {
    let composite = CompositeFilter::new()
        .with(Box::new(AssigneeFilter::new("alex")))
        .with(Box::new(PriorityFilter::new(TaskPriority::High)));

    let kept = composite.filter(&tasks);
    assert_eq!(ids(&kept), vec![1]);
}

#[rstest]
fn empty_composite_keeps_everything(tasks: Vec<Task>) {
    let kept = CompositeFilter::new().filter(&tasks);
    assert_eq!(ids(&kept), vec![1, 2, 3, 4]);
}
