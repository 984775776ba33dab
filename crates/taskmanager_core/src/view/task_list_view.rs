//! Task list screen projection.
//!
//! # Invariants
//! - Row keys are always the task id; there is no fallback key.
//! - `empty_message` is set exactly when the list has no tasks.

use crate::store::task_list_store::TaskListSnapshot;
use serde::Serialize;

pub const HEADER_TITLE: &str = "Task Manager";
pub const INPUT_PLACEHOLDER: &str = "What needs to be done?";
pub const ADD_BUTTON_LABEL: &str = "Add";
pub const EMPTY_LIST_MESSAGE: &str = "No tasks added yet.";

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRowView {
    /// Stable list key, the task id in decimal form.
    pub key: String,
    pub text: String,
    pub completed: bool,
    /// Accessibility label of the row body.
    pub toggle_label: String,
    /// Accessibility label of the delete control.
    pub delete_label: String,
}

/// Everything the screen needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskListView {
    pub header_title: &'static str,
    pub input_placeholder: &'static str,
    pub draft_text: String,
    pub add_button_label: &'static str,
    pub rows: Vec<TaskRowView>,
    pub empty_message: Option<&'static str>,
}

impl TaskListView {
    pub fn from_snapshot(snapshot: &TaskListSnapshot) -> Self {
        let rows = snapshot
            .tasks
            .iter()
            .map(|task| TaskRowView {
                key: task.id().to_string(),
                text: task.text().to_string(),
                completed: task.completed(),
                toggle_label: format!("Toggle completion for {}", task.text()),
                delete_label: format!("Delete {}", task.text()),
            })
            .collect::<Vec<_>>();
        let empty_message = rows.is_empty().then_some(EMPTY_LIST_MESSAGE);

        Self {
            header_title: HEADER_TITLE,
            input_placeholder: INPUT_PLACEHOLDER,
            draft_text: snapshot.draft_text.clone(),
            add_button_label: ADD_BUTTON_LABEL,
            rows,
            empty_message,
        }
    }
}
