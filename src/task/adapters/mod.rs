//! Built-in observer adapters.
//!
//! These are example collaborators over the core dispatch mechanism:
//! console notifiers writing to an injected sink, and an activity log
//! emitting through the `log` facade.

mod activity;
mod console;

pub use activity::ActivityLog;
pub use console::{AssigneeNotifier, ManagerNotifier};
