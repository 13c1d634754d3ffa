//! New Task Form Component
//!
//! Input row for adding sub-tasks, with the inline validation note.

use leptos::prelude::*;

use crate::context::BoardContext;
use crate::store::BoardStateStoreFields;

/// Form for adding a sub-task at the end of the list
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");
    let store = ctx.store;

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked();
        match ctx.add(&text) {
            Ok(Some(item)) => {
                log::info!("[FORM] Added task {}", item.id);
                set_new_text.set(String::new());
            }
            Ok(None) => {}
            // The note is already on screen; keep the input for correction
            Err(e) => log::debug!("[FORM] {}", e),
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <div class="new-task-row">
                <input
                    id="subTaskInput"
                    type="text"
                    placeholder="Add new sub task..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button id="addTask" type="submit">"Add"</button>
            </div>
            <p id="errorNote" class="error-note">
                {move || store.error_note().get().unwrap_or_default()}
            </p>
        </form>
    }
}
