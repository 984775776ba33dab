//! Task list state machine.
//!
//! # Responsibility
//! - Own the ordered task collection and the draft text.
//! - Apply user intents one at a time and expose read-only snapshots.
//!
//! # Invariants
//! - The store is the only writer of tasks and draft text.
//! - Invalid intents (blank draft, unknown id) are absorbed as no-ops.

pub mod intent;
pub mod task_list_store;
