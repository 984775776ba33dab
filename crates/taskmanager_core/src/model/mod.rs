//! Task domain model.
//!
//! # Responsibility
//! - Define the task record rendered by the presentation surface.
//! - Define the identifier type used for lookup, toggle and delete.
//!
//! # Invariants
//! - Every task carries a real `TaskId`; there is no placeholder identity.

pub mod task;
