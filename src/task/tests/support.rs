//! Shared fixtures for task module tests.

use crate::task::domain::{Task, TaskEvent};
use crate::task::ports::{ObserverError, TaskObserver};
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

/// Clock returning a fixed base time advanced by one second per call.
pub struct SteppingClock {
    base: DateTime<Utc>,
    tick: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        let base = Utc
            .with_ymd_and_hms(2026, 1, 1, 9, 0, 0)
            .single()
            .expect("valid base timestamp");
        Self {
            base,
            tick: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.tick.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

/// Observer recording every delivered snapshot and event kind.
#[derive(Default)]
pub struct RecordingObserver {
    deliveries: Mutex<Vec<(Task, TaskEvent)>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deliveries(&self) -> Vec<(Task, TaskEvent)> {
        self.deliveries.lock().expect("deliveries lock").clone()
    }

    pub fn kinds(&self) -> Vec<TaskEvent> {
        self.deliveries
            .lock()
            .expect("deliveries lock")
            .iter()
            .map(|(_, event)| *event)
            .collect()
    }
}

impl TaskObserver for RecordingObserver {
    fn on_event(&self, task: &Task, event: TaskEvent) -> Result<(), ObserverError> {
        self.deliveries
            .lock()
            .expect("deliveries lock")
            .push((task.clone(), event));
        Ok(())
    }
}

/// Observer that always fails delivery.
pub struct FailingObserver;

impl TaskObserver for FailingObserver {
    fn on_event(&self, _task: &Task, _event: TaskEvent) -> Result<(), ObserverError> {
        Err(ObserverError::Delivery("simulated failure".to_owned()))
    }
}

/// Observer appending its label to a shared log, for ordering checks.
pub struct TaggedObserver {
    label: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
}

impl TaggedObserver {
    pub fn new(label: &'static str, log: Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self { label, log }
    }
}

impl TaskObserver for TaggedObserver {
    fn on_event(&self, _task: &Task, _event: TaskEvent) -> Result<(), ObserverError> {
        self.log.lock().expect("order log lock").push(self.label);
        Ok(())
    }
}
