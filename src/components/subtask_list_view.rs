//! Sub-task List View Component
//!
//! Renders the store's rows in display order.

use leptos::prelude::*;

use crate::components::SubTaskRow;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn SubTaskListView() -> impl IntoView {
    let store = use_board_store();

    view! {
        <ul class="sub-list-container">
            <For
                each=move || store.rows().get()
                // Completed is part of the key so a toggled row re-renders
                key=|row| (row.id, row.completed)
                children=move |row| view! { <SubTaskRow item=row /> }
            />
        </ul>
        <Show when=move || store.rows().read().is_empty()>
            <p class="empty-note">"No sub tasks yet"</p>
        </Show>
    }
}
