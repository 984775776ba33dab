//! In-memory task list store.
//!
//! # Invariants
//! - Tasks keep insertion order; new tasks are appended.
//! - Ids come from a strictly increasing counter and are never reused.
//! - A successful add always leaves the draft empty.
//! - Toggle never changes length or order.

use crate::model::task::{Task, TaskId};
use log::debug;
use serde::{Deserialize, Serialize};

/// Read-only copy of store state handed to the presentation surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<Task>,
    /// Not-yet-submitted input text.
    pub draft_text: String,
}

impl TaskListSnapshot {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Sole owner of the task list and draft text.
#[derive(Debug, Default)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    draft_text: String,
    last_issued_id: u64,
}

impl TaskListStore {
    /// Creates an empty store with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the draft verbatim. No validation.
    pub fn set_draft_text(&mut self, value: impl Into<String>) {
        self.draft_text = value.into();
    }

    /// Turns the current draft into a new open task.
    ///
    /// A draft that is blank after trimming is ignored and left untouched.
    /// Otherwise the untrimmed draft becomes the task text, the task is
    /// appended, and the draft is cleared.
    ///
    /// Returns the new task id, or `None` when the draft was blank.
    pub fn add_task(&mut self) -> Option<TaskId> {
        if self.draft_text.trim().is_empty() {
            debug!(
                "event=task_add module=store status=skipped reason=blank_draft draft_len={}",
                self.draft_text.len()
            );
            return None;
        }

        let id = self.issue_id();
        let text = std::mem::take(&mut self.draft_text);
        self.tasks.push(Task::new(id, text));
        debug!(
            "event=task_add module=store status=ok task_id={} task_count={}",
            id,
            self.tasks.len()
        );
        Some(id)
    }

    /// Flips completion of the task with `id`. Returns `false` if none matched.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id() == id) {
            Some(task) => {
                task.toggle();
                debug!(
                    "event=task_toggle module=store status=ok task_id={} completed={}",
                    id,
                    task.completed()
                );
                true
            }
            None => {
                debug!("event=task_toggle module=store status=skipped reason=unknown_id task_id={id}");
                false
            }
        }
    }

    /// Removes the task with `id`, keeping the others in order.
    /// Returns `false` if none matched.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|task| task.id() == id) else {
            debug!("event=task_delete module=store status=skipped reason=unknown_id task_id={id}");
            return false;
        };
        self.tasks.remove(index);
        debug!(
            "event=task_delete module=store status=ok task_id={} task_count={}",
            id,
            self.tasks.len()
        );
        true
    }

    /// Copies current state for rendering.
    pub fn snapshot(&self) -> TaskListSnapshot {
        TaskListSnapshot {
            tasks: self.tasks.clone(),
            draft_text: self.draft_text.clone(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn issue_id(&mut self) -> TaskId {
        self.last_issued_id += 1;
        TaskId::from_raw(self.last_issued_id)
    }
}
