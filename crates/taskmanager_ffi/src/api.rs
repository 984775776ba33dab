//! FFI API for the Flutter task list screen.
//!
//! # Responsibility
//! - Expose a task list session and its intents to Dart via FRB.
//! - Convert core types into plain bridge DTOs.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Task ids cross the boundary as decimal strings; bad ids behave as unknown ids.

use log::warn;
use taskmanager_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Task, TaskId, TaskListSnapshot, TaskListStore, TaskListView,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory for rolling log files.
///
/// # FFI contract
/// - Safe to repeat with the same arguments.
/// - Never panics; returns empty string on success and the error text otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Task item as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable id, also used as the list key.
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Snapshot returned after every intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListState {
    pub tasks: Vec<TaskItem>,
    pub draft_text: String,
}

/// One rendered row with accessibility labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub key: String,
    pub text: String,
    pub completed: bool,
    pub toggle_label: String,
    pub delete_label: String,
}

/// Full screen model for the task list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskScreen {
    pub header_title: String,
    pub input_placeholder: String,
    pub draft_text: String,
    pub add_button_label: String,
    pub rows: Vec<TaskRow>,
    /// Present only when the list is empty.
    pub empty_message: Option<String>,
}

/// Host-owned task list. Dart keeps one per screen and calls it from the UI
/// isolate, so every intent runs to completion before the next one starts.
#[flutter_rust_bridge::frb(opaque)]
#[derive(Debug, Default)]
pub struct TaskListSession {
    store: TaskListStore,
}

impl TaskListSession {
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Text field change handler.
    #[flutter_rust_bridge::frb(sync)]
    pub fn set_draft_text(&mut self, value: String) -> TaskListState {
        self.store.set_draft_text(value);
        self.state()
    }

    /// Add button and return key handler. Blank drafts are ignored.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&mut self) -> TaskListState {
        self.store.add_task();
        self.state()
    }

    /// Row tap handler.
    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&mut self, id: String) -> TaskListState {
        if let Some(id) = parse_task_id(&id, "toggle_task") {
            self.store.toggle_task(id);
        }
        self.state()
    }

    /// Delete control handler.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_task(&mut self, id: String) -> TaskListState {
        if let Some(id) = parse_task_id(&id, "delete_task") {
            self.store.delete_task(id);
        }
        self.state()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> TaskListState {
        self.state()
    }

    /// Screen model including labels and empty-state text.
    #[flutter_rust_bridge::frb(sync)]
    pub fn screen(&self) -> TaskScreen {
        to_task_screen(TaskListView::from_snapshot(&self.store.snapshot()))
    }

    fn state(&self) -> TaskListState {
        to_task_list_state(self.store.snapshot())
    }
}

fn parse_task_id(raw: &str, operation: &str) -> Option<TaskId> {
    match raw.parse::<TaskId>() {
        Ok(id) => Some(id),
        Err(err) => {
            warn!("event={operation} module=ffi status=skipped reason=bad_id error={err}");
            None
        }
    }
}

fn to_task_list_state(snapshot: TaskListSnapshot) -> TaskListState {
    TaskListState {
        tasks: snapshot.tasks.iter().map(to_task_item).collect(),
        draft_text: snapshot.draft_text,
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id().to_string(),
        text: task.text().to_string(),
        completed: task.completed(),
    }
}

fn to_task_screen(view: TaskListView) -> TaskScreen {
    TaskScreen {
        header_title: view.header_title.to_string(),
        input_placeholder: view.input_placeholder.to_string(),
        draft_text: view.draft_text,
        add_button_label: view.add_button_label.to_string(),
        rows: view
            .rows
            .into_iter()
            .map(|row| TaskRow {
                key: row.key,
                text: row.text,
                completed: row.completed,
                toggle_label: row.toggle_label,
                delete_label: row.delete_label,
            })
            .collect(),
        empty_message: view.empty_message.map(str::to_string),
    }
}
