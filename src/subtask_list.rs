//! Sub-task List
//!
//! Ordered in-memory list of tasks. Every change is mirrored to a
//! `RenderSurface` supplied by the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{TaskId, TaskItem};

#[cfg(test)]
mod tests;

/// Message shown under the input when a task is rejected
pub const DEFAULT_ERROR_MESSAGE: &str = "Please Enter Valid Input";

/// Rejected task input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please Enter Valid Input")]
    EmptyText,
}

/// How `toggle_all_completed` decides which way to flip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkTogglePolicy {
    /// Alternate on every call: odd calls complete all, even calls reopen all
    #[default]
    Parity,
    /// Reopen all when every task is completed, otherwise complete all
    Derived,
}

impl BulkTogglePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulkTogglePolicy::Parity => "parity",
            BulkTogglePolicy::Derived => "derived",
        }
    }
}

/// Effects consumed by whatever draws the list
pub trait RenderSurface {
    /// Append a row for a newly added task
    fn render_row(&mut self, item: &TaskItem);

    /// Remove the row of a deleted task
    fn remove_row(&mut self, id: TaskId);

    /// Set or clear the completed marker of a row
    fn set_row_completed(&mut self, id: TaskId, completed: bool);

    /// Remove every row
    fn clear_rows(&mut self);

    /// Show (`Some`) or hide (`None`) the inline error note
    fn set_error_note(&mut self, note: Option<&str>);
}

/// Surface that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn render_row(&mut self, _item: &TaskItem) {}
    fn remove_row(&mut self, _id: TaskId) {}
    fn set_row_completed(&mut self, _id: TaskId, _completed: bool) {}
    fn clear_rows(&mut self) {}
    fn set_error_note(&mut self, _note: Option<&str>) {}
}

/// The sub-task list
#[derive(Debug)]
pub struct SubTaskList<R: RenderSurface> {
    items: Vec<TaskItem>,
    next_id: u32,
    /// Number of `toggle_all_completed` calls; survives `clear_all`
    bulk_toggle_count: u32,
    policy: BulkTogglePolicy,
    error_message: Option<String>,
    surface: R,
}

impl<R: RenderSurface> SubTaskList<R> {
    pub fn new(surface: R) -> Self {
        Self::with_policy(surface, BulkTogglePolicy::default())
    }

    pub fn with_policy(surface: R, policy: BulkTogglePolicy) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            bulk_toggle_count: 0,
            policy,
            error_message: None,
            surface,
        }
    }

    /// Replace the inline message shown for rejected input
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    // ========================
    // Operations
    // ========================

    /// Append a task. Blank text is rejected and leaves the list untouched.
    pub fn add(&mut self, text: &str) -> Result<TaskItem, ValidationError> {
        self.surface.set_error_note(None);

        if text.trim().is_empty() {
            let err = ValidationError::EmptyText;
            let note = self
                .error_message
                .clone()
                .unwrap_or_else(|| err.to_string());
            self.surface.set_error_note(Some(&note));
            log::debug!("[LIST] Rejected task input {:?}", text);
            return Err(err);
        }

        let item = TaskItem::new(TaskId(self.next_id), text.to_string());
        self.next_id += 1;
        self.surface.render_row(&item);
        self.items.push(item.clone());
        log::debug!("[LIST] Added task {} ({} total)", item.id, self.items.len());
        Ok(item)
    }

    /// Remove a task. Unknown ids are treated as already removed.
    pub fn delete(&mut self, id: TaskId) {
        let Some(index) = self.position(id) else {
            log::debug!("[LIST] Delete of absent task {} ignored", id);
            return;
        };
        self.items.remove(index);
        self.surface.remove_row(id);
        log::debug!("[LIST] Deleted task {} ({} left)", id, self.items.len());
    }

    /// Flip one task's completed flag
    pub fn toggle_completed(&mut self, id: TaskId) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.completed = !item.completed;
        self.surface.set_row_completed(id, item.completed);
    }

    /// Complete or reopen every task at once, following the configured policy
    pub fn toggle_all_completed(&mut self) {
        let completed = match self.policy {
            BulkTogglePolicy::Parity => self.bulk_toggle_count % 2 == 0,
            BulkTogglePolicy::Derived => !self.all_completed(),
        };
        self.bulk_toggle_count = self.bulk_toggle_count.wrapping_add(1);

        for item in &mut self.items {
            item.completed = completed;
            self.surface.set_row_completed(item.id, completed);
        }
        log::debug!(
            "[LIST] Bulk toggle #{} ({}): {} tasks -> completed={}",
            self.bulk_toggle_count,
            self.policy.as_str(),
            self.items.len(),
            completed
        );
    }

    /// Remove every task. The bulk toggle counter keeps its value.
    pub fn clear_all(&mut self) {
        self.items.clear();
        self.surface.clear_rows();
        log::debug!("[LIST] Cleared all tasks");
    }

    // ========================
    // Queries
    // ========================

    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&TaskItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// True when every task is completed (vacuously true for an empty list)
    pub fn all_completed(&self) -> bool {
        self.items.iter().all(|item| item.completed)
    }

    pub fn bulk_toggle_count(&self) -> u32 {
        self.bulk_toggle_count
    }

    pub fn policy(&self) -> BulkTogglePolicy {
        self.policy
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
