//! Task record and identifier.
//!
//! # Invariants
//! - `TaskId` values are assigned by the store and never reused.
//! - `text` is fixed at creation; only `completed` changes afterwards.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier of one task. Also used as the row render key.
///
/// Serialized as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = TaskIdParseError;

    /// Parses the decimal render-key form produced by `Display`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskIdParseError::Empty);
        }
        match trimmed.parse::<u64>() {
            Ok(0) => Err(TaskIdParseError::Zero),
            Ok(raw) => Ok(Self(raw)),
            Err(_) => Err(TaskIdParseError::Invalid(trimmed.to_string())),
        }
    }
}

/// Errors for converting boundary text into a `TaskId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIdParseError {
    Empty,
    /// Zero is never handed out by the store.
    Zero,
    Invalid(String),
}

impl Display for TaskIdParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task id must not be empty"),
            Self::Zero => write!(f, "task id must be greater than zero"),
            Self::Invalid(value) => write!(f, "task id is not a positive integer: `{value}`"),
        }
    }
}

impl Error for TaskIdParseError {}

/// One user-entered to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
}

impl Task {
    /// Creates an open task. Only the store calls this, after validating text.
    pub(crate) fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Text exactly as entered, surrounding whitespace included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
