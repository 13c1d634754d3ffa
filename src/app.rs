//! Sub-task Board App
//!
//! Main application component: input form, task list and bulk actions.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BulkActions, NewTaskForm, SubTaskListView};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::store::{BoardState, BoardStateStoreFields};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    provide_context(store);

    // The list writes into the store; provide it to all children
    let ctx = BoardContext::new(store, &config);
    provide_context(ctx);

    let status = move || {
        let rows = store.rows().read();
        let completed = rows.iter().filter(|row| row.completed).count();
        format!("{} tasks, {} completed", rows.len(), completed)
    };

    view! {
        <div class="board-layout">
            <main class="main-content">
                <h1>{config.title}</h1>

                <NewTaskForm />

                <SubTaskListView />

                <BulkActions />

                <p class="task-count">{status}</p>
            </main>
        </div>
    }
}
