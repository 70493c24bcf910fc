//! Store, notification, and command services for the task module.

mod bus;
mod command;
mod store;

pub use bus::NotificationBus;
pub use command::{AssignTask, Command, CommandInvoker, CreateTask, UpdateStatus};
pub use store::TaskStore;
