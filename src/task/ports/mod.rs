//! Port contracts for task event observation.

mod observer;

pub use observer::{ObserverError, TaskObserver};
