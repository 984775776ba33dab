//! Render models for the single task list screen.
//!
//! Pure projections of `TaskListSnapshot`; no styling or layout.

pub mod task_list_view;
