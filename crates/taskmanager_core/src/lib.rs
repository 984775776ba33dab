//! Core domain logic for Task Manager.
//! This crate is the single source of truth for task list invariants.

pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskIdParseError};
pub use store::intent::{Gesture, IntentOutcome, TaskIntent};
pub use store::task_list_store::{TaskListSnapshot, TaskListStore};
pub use view::task_list_view::{TaskListView, TaskRowView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
