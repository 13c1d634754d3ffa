//! Frontend Models
//!
//! Data structures for the sub-task board.

use serde::{Deserialize, Serialize};

/// Opaque handle for a task row, assigned when the task is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u32);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One sub-task entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl TaskItem {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// A task pre-rendered by the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTask {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}
