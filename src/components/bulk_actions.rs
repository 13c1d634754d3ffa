//! Bulk Action Buttons
//!
//! "Mark all completed" and "Delete all" for the whole list.

use leptos::prelude::*;

use crate::context::BoardContext;

#[component]
pub fn BulkActions() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    view! {
        <div class="bulk-actions">
            <button
                id="completedAll"
                type="button"
                class="bulk-btn"
                on:click=move |_| ctx.toggle_all_completed()
            >
                "Mark all completed"
            </button>
            <button
                id="deleteAllTasks"
                type="button"
                class="bulk-btn danger"
                on:click=move |_| {
                    rolling_logger::info("[BOARD] Clearing all tasks");
                    ctx.clear_all();
                }
            >
                "Delete all"
            </button>
        </div>
    }
}
