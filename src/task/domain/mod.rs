//! Domain model for task tracking.
//!
//! The task domain models the task entity itself, its status and priority
//! vocabularies, comment history, and the event kinds broadcast after
//! each mutation, while keeping all infrastructure concerns outside of
//! the domain boundary.

mod error;
mod event;
mod ids;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError};
pub use event::TaskEvent;
pub use ids::TaskId;
pub use task::{Comment, NewTask, Task, TaskPriority, TaskStatus};
