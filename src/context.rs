//! Board Context
//!
//! Shared handle to the sub-task list, provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::models::{TaskId, TaskItem};
use crate::store::{store_set_error_note, BoardStore, StoreSurface};
use crate::subtask_list::{SubTaskList, ValidationError};

/// Board-wide handle provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    /// The list itself; its surface writes into `store`
    list: StoredValue<SubTaskList<StoreSurface>>,
    /// Rendered state the views read from
    pub store: BoardStore,
}

impl BoardContext {
    /// Build the list over `store` and replay the page's seed tasks
    pub fn new(store: BoardStore, config: &BoardConfig) -> Self {
        let mut list = SubTaskList::with_policy(StoreSurface(store), config.bulk_toggle_policy)
            .with_error_message(config.error_message.clone());

        for seed in &config.seed_tasks {
            match list.add(&seed.text) {
                Ok(item) if seed.completed => list.toggle_completed(item.id),
                Ok(_) => {}
                Err(e) => log::warn!("[BOARD] Skipping seed task {:?}: {}", seed.text, e),
            }
        }
        // Seeds must not leave a validation note behind
        store_set_error_note(&store, None);

        rolling_logger::info(&format!(
            "[BOARD] Ready with {} tasks, bulk toggle policy '{}'",
            list.len(),
            list.policy().as_str()
        ));

        Self {
            list: StoredValue::new(list),
            store,
        }
    }

    /// Add a task. `Ok(None)` means the board has been torn down.
    pub fn add(&self, text: &str) -> Result<Option<TaskItem>, ValidationError> {
        self.list.try_update_value(|list| list.add(text)).transpose()
    }

    pub fn delete(&self, id: TaskId) {
        self.list.update_value(|list| list.delete(id));
    }

    pub fn toggle_completed(&self, id: TaskId) {
        self.list.update_value(|list| list.toggle_completed(id));
    }

    pub fn toggle_all_completed(&self) {
        self.list.update_value(|list| list.toggle_all_completed());
    }

    pub fn clear_all(&self) {
        self.list.update_value(|list| list.clear_all());
    }

    /// Number of bulk toggles so far (0 once the board is torn down)
    pub fn bulk_toggle_count(&self) -> u32 {
        self.list
            .try_with_value(|list| list.bulk_toggle_count())
            .unwrap_or_default()
    }
}
