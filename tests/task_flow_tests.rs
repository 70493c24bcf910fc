//! End-to-end flows over the public API: commands driving the store,
//! observer fan-out, undo, filters, reports, and approval.

use foreman::approval::{ApprovalPolicy, Approver, Decision};
use foreman::filter::{AssigneeFilter, FilterStrategy, StatusFilter};
use foreman::report::{ReportGenerator, StatusReport};
use foreman::task::adapters::{AssigneeNotifier, ManagerNotifier};
use foreman::task::domain::{NewTask, Task, TaskEvent, TaskId, TaskPriority, TaskStatus};
use foreman::task::ports::{ObserverError, TaskObserver};
use foreman::task::services::{
    AssignTask, CommandInvoker, CreateTask, TaskStore, UpdateStatus,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Observer recording event kinds through the public port.
#[derive(Default)]
struct EventLog {
    kinds: Mutex<Vec<TaskEvent>>,
}

impl EventLog {
    fn kinds(&self) -> Vec<TaskEvent> {
        self.kinds.lock().expect("event log lock").clone()
    }
}

impl TaskObserver for EventLog {
    fn on_event(&self, _task: &Task, event: TaskEvent) -> Result<(), ObserverError> {
        self.kinds.lock().expect("event log lock").push(event);
        Ok(())
    }
}

/// Cloneable in-memory sink for the console notifier adapters.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("buffer lock")).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Asserts exactly one task is present with the expected id.
///
/// # Errors
///
/// Returns an error if the slice does not contain exactly one task
/// matching `expected_id`.
fn assert_sole_task(tasks: &[Task], expected_id: TaskId) -> Result<(), eyre::Report> {
    eyre::ensure!(
        tasks.len() == 1,
        "expected exactly one task, found {}",
        tasks.len()
    );
    let task = tasks
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one task"))?;
    eyre::ensure!(task.id() == expected_id, "task ID mismatch");
    Ok(())
}

struct Harness {
    store: TaskStore<DefaultClock>,
    invoker: CommandInvoker<DefaultClock>,
    events: Arc<EventLog>,
}

#[fixture]
fn harness() -> Harness {
    let mut store = TaskStore::new();
    let events = Arc::new(EventLog::default());
    store.bus_mut().attach(events.clone());
    Harness {
        store,
        invoker: CommandInvoker::new(),
        events,
    }
}

#[rstest]
fn create_then_complete_notifies_in_order(mut harness: Harness) {
    harness.invoker.execute(
        Box::new(CreateTask::new(
            NewTask::new("A", "first scenario")
                .with_assignee("alex")
                .with_priority(TaskPriority::High),
        )),
        &mut harness.store,
    );
    harness.invoker.execute(
        Box::new(UpdateStatus::new(TaskId::new(1), TaskStatus::Done)),
        &mut harness.store,
    );

    assert_eq!(
        harness.events.kinds(),
        vec![TaskEvent::Created, TaskEvent::StatusChanged]
    );
}

#[rstest]
fn attaching_the_same_observer_twice_delivers_once(mut harness: Harness) {
    harness.store.bus_mut().attach(harness.events.clone());

    harness.store.create(NewTask::new("A", "d"));

    assert_eq!(harness.events.kinds(), vec![TaskEvent::Created]);
}

#[rstest]
fn undo_after_a_session_of_commands_reverses_only_the_last(mut harness: Harness) {
    harness.invoker.execute(
        Box::new(CreateTask::new(NewTask::new("A", "d").with_assignee("alex"))),
        &mut harness.store,
    );
    harness.invoker.execute(
        Box::new(CreateTask::new(NewTask::new("B", "d"))),
        &mut harness.store,
    );
    harness.invoker.execute(
        Box::new(AssignTask::new(TaskId::new(2), Some("maria".to_owned()))),
        &mut harness.store,
    );

    assert!(harness.invoker.undo_last(&mut harness.store));

    let second = harness.store.get(TaskId::new(2)).expect("task B present");
    assert_eq!(second.assignee(), None);
    assert_eq!(harness.store.list().len(), 2);

    // The next undo removes task B itself.
    assert!(harness.invoker.undo_last(&mut harness.store));
    assert_eq!(harness.store.get(TaskId::new(2)), None);
}

#[rstest]
fn undoing_a_create_makes_the_id_unreachable_forever(mut harness: Harness) {
    harness.invoker.execute(
        Box::new(CreateTask::new(NewTask::new("A", "d"))),
        &mut harness.store,
    );
    assert!(harness.invoker.undo_last(&mut harness.store));
    assert_eq!(harness.store.get(TaskId::new(1)), None);

    // The freed id is never handed out again.
    let next = harness.store.create(NewTask::new("B", "d"));
    assert_eq!(next.id(), TaskId::new(2));
}

#[rstest]
fn console_notifiers_write_for_the_right_events(mut harness: Harness) {
    let assignee_sink = SharedBuf::default();
    let manager_sink = SharedBuf::default();
    harness
        .store
        .bus_mut()
        .attach(Arc::new(AssigneeNotifier::new(assignee_sink.clone())));
    harness
        .store
        .bus_mut()
        .attach(Arc::new(ManagerNotifier::new(manager_sink.clone())));

    let created = harness
        .store
        .create(NewTask::new("Ship release", "d").with_assignee("alex"));
    harness.store.update_status(created.id(), TaskStatus::Done);

    let assignee_out = assignee_sink.contents();
    assert!(assignee_out.contains("alex, task 'Ship release' has been created."));
    assert!(assignee_out.contains("alex, task 'Ship release' has been status_changed."));

    let manager_out = manager_sink.contents();
    assert!(manager_out.contains("New task created: 'Ship release'"));
    assert!(manager_out.contains("marked as completed and requires review"));
}

#[rstest]
fn filters_and_reports_consume_store_listings(mut harness: Harness) -> Result<(), eyre::Report> {
    harness.store.create(
        NewTask::new("Login", "d")
            .with_assignee("alex")
            .with_priority(TaskPriority::High),
    );
    harness
        .store
        .create(NewTask::new("Docs", "d").with_assignee("sam"));
    harness
        .store
        .update_status(TaskId::new(2), TaskStatus::Done);

    let tasks = harness.store.list();
    let todo = StatusFilter::new(TaskStatus::ToDo).filter(&tasks);
    assert_sole_task(&todo, TaskId::new(1))?;
    let alexs = AssigneeFilter::new("alex").filter(&tasks);
    assert_sole_task(&alexs, TaskId::new(1))?;

    let report = StatusReport.generate(&tasks);
    assert!(report.contains("Total tasks: 2"));
    assert!(report.contains("  To Do: 1 tasks"));
    assert!(report.contains("  Done: 1 tasks"));
    Ok(())
}

#[rstest]
fn approval_policy_decides_from_store_snapshots(mut harness: Harness) {
    let created = harness
        .store
        .create(NewTask::new("Hotfix", "d").with_priority(TaskPriority::Critical));
    let task = harness.store.get(created.id()).expect("task present");

    assert_eq!(
        ApprovalPolicy::standard().decide(&task),
        Decision::Approved(Approver::Director)
    );
}
