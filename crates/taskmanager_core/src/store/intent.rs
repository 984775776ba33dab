//! User intents and the gestures that produce them.
//!
//! # Responsibility
//! - Give the presentation surface one entry point (`dispatch`) for mutations.
//! - Map raw UI gestures onto the four store intents.

use crate::model::task::TaskId;
use crate::store::task_list_store::TaskListStore;
use serde::{Deserialize, Serialize};

/// A named operation that may mutate store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", content = "value", rename_all = "snake_case")]
pub enum TaskIntent {
    SetDraftText(String),
    AddTask,
    ToggleTask(TaskId),
    DeleteTask(TaskId),
}

/// Raw user gesture forwarded by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// The input field content changed.
    TextChanged(String),
    /// Return key in the input field.
    SubmitEditing,
    AddButtonPressed,
    /// Tap on a row body.
    TaskPressed(TaskId),
    /// Tap on a row's delete control.
    DeletePressed(TaskId),
}

impl From<Gesture> for TaskIntent {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::TextChanged(value) => Self::SetDraftText(value),
            Gesture::SubmitEditing | Gesture::AddButtonPressed => Self::AddTask,
            Gesture::TaskPressed(id) => Self::ToggleTask(id),
            Gesture::DeletePressed(id) => Self::DeleteTask(id),
        }
    }
}

/// Whether an intent changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentOutcome {
    Applied,
    /// Absorbed as a no-op (blank draft or unknown id).
    Ignored,
}

impl IntentOutcome {
    fn from_applied(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Ignored
        }
    }

    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

impl TaskListStore {
    /// Applies one intent to completion.
    pub fn dispatch(&mut self, intent: impl Into<TaskIntent>) -> IntentOutcome {
        match intent.into() {
            TaskIntent::SetDraftText(value) => {
                self.set_draft_text(value);
                IntentOutcome::Applied
            }
            TaskIntent::AddTask => IntentOutcome::from_applied(self.add_task().is_some()),
            TaskIntent::ToggleTask(id) => IntentOutcome::from_applied(self.toggle_task(id)),
            TaskIntent::DeleteTask(id) => IntentOutcome::from_applied(self.delete_task(id)),
        }
    }
}
