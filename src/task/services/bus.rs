//! Ordered fan-out of task mutation events to attached observers.

use crate::task::domain::{Task, TaskEvent};
use crate::task::ports::TaskObserver;
use std::fmt;
use std::sync::Arc;

/// Observer subject broadcasting each mutation event.
///
/// Observers are held in attachment order and receive events in that
/// order. Attachment identity is the `Arc` pointer: attaching the same
/// `Arc` twice is a no-op, as is detaching one that is absent.
#[derive(Default)]
pub struct NotificationBus {
    observers: Vec<Arc<dyn TaskObserver>>,
}

impl NotificationBus {
    /// Creates a bus with no attached observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer; a no-op when it is already attached.
    pub fn attach(&mut self, observer: Arc<dyn TaskObserver>) {
        if !self.is_attached(&observer) {
            self.observers.push(observer);
        }
    }

    /// Detaches an observer; a no-op when it is not attached.
    pub fn detach(&mut self, observer: &Arc<dyn TaskObserver>) {
        self.observers
            .retain(|attached| !Arc::ptr_eq(attached, observer));
    }

    /// Returns whether the given observer is currently attached.
    #[must_use]
    pub fn is_attached(&self, observer: &Arc<dyn TaskObserver>) -> bool {
        self.observers
            .iter()
            .any(|attached| Arc::ptr_eq(attached, observer))
    }

    /// Returns the number of attached observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns whether no observers are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers one event to every attached observer, in attachment
    /// order, passing the same task snapshot to all.
    ///
    /// A failing observer is reported here and does not block delivery
    /// to the observers after it; errors never reach the store caller.
    pub fn notify(&self, task: &Task, event: TaskEvent) {
        for observer in &self.observers {
            if let Err(err) = observer.on_event(task, event) {
                log::warn!("observer failed during {event} for task {}: {err}", task.id());
            }
        }
    }
}

impl fmt::Debug for NotificationBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBus")
            .field("observers", &self.observers.len())
            .finish()
    }
}
