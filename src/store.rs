//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! rendering surface of the sub-task list: every list effect lands here and
//! the views follow.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{TaskId, TaskItem};
use crate::subtask_list::RenderSurface;

/// Rendered board state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Visible rows in display order
    pub rows: Vec<TaskItem>,
    /// Inline note under the input (validation message)
    pub error_note: Option<String>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a row
pub fn store_add_row(store: &BoardStore, item: TaskItem) {
    store.rows().write().push(item);
}

/// Remove a row by ID
pub fn store_remove_row(store: &BoardStore, id: TaskId) {
    store.rows().write().retain(|row| row.id != id);
}

/// Set the completed marker of a row by ID
pub fn store_set_row_completed(store: &BoardStore, id: TaskId, completed: bool) {
    if let Some(row) = store.rows().write().iter_mut().find(|row| row.id == id) {
        row.completed = completed;
    }
}

/// Remove every row
pub fn store_clear_rows(store: &BoardStore) {
    store.rows().write().clear();
}

/// Set or clear the inline error note
pub fn store_set_error_note(store: &BoardStore, note: Option<&str>) {
    *store.error_note().write() = note.map(str::to_string);
}

/// `RenderSurface` backed by the board store
#[derive(Clone, Copy)]
pub struct StoreSurface(pub BoardStore);

impl RenderSurface for StoreSurface {
    fn render_row(&mut self, item: &TaskItem) {
        store_add_row(&self.0, item.clone());
    }

    fn remove_row(&mut self, id: TaskId) {
        store_remove_row(&self.0, id);
    }

    fn set_row_completed(&mut self, id: TaskId, completed: bool) {
        store_set_row_completed(&self.0, id, completed);
    }

    fn clear_rows(&mut self) {
        store_clear_rows(&self.0);
    }

    fn set_error_note(&mut self, note: Option<&str>) {
        store_set_error_note(&self.0, note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtask_list::SubTaskList;

    #[test]
    fn test_store_mirrors_list() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(BoardState::default());
            let mut list = SubTaskList::new(StoreSurface(store));

            let a = list.add("Sterilize tray").unwrap();
            list.add("Restock gloves").unwrap();
            list.toggle_completed(a.id);
            assert_eq!(store.rows().get_untracked(), list.items().to_vec());

            list.delete(a.id);
            assert_eq!(store.rows().get_untracked(), list.items().to_vec());

            let _ = list.add(" ");
            assert!(store.error_note().get_untracked().is_some());
            list.add("Call lab").unwrap();
            assert!(store.error_note().get_untracked().is_none());

            list.clear_all();
            assert!(store.rows().get_untracked().is_empty());
        });
    }
}
