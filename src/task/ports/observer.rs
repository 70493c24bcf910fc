//! Observer port for task mutation events.

use crate::task::domain::{Task, TaskEvent};
use thiserror::Error;

/// Errors returned by observer implementations.
///
/// A failing observer never interrupts delivery to the remaining
/// observers; the notification bus reports the error at its own boundary
/// and carries on.
#[derive(Debug, Error)]
pub enum ObserverError {
    /// The observer's output sink rejected the write.
    #[error("failed to write notification: {0}")]
    Sink(#[from] std::io::Error),

    /// The observer could not deliver its side effect.
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Contract for collaborators reacting to task mutations.
///
/// Observers are invoked synchronously, in attachment order, with the
/// post-mutation task snapshot (last known snapshot for
/// [`TaskEvent::Deleted`]) and the event kind. Implementations must not
/// assume the task still exists in the store.
pub trait TaskObserver {
    /// Reacts to a single task mutation event.
    ///
    /// # Errors
    ///
    /// Returns [`ObserverError`] when the side effect cannot be
    /// delivered; the bus isolates the failure.
    fn on_event(&self, task: &Task, event: TaskEvent) -> Result<(), ObserverError>;
}
