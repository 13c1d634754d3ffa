//! Sub-task Row Component
//!
//! A single task row. Its handlers are bound when the row is created.

use leptos::prelude::*;

use crate::context::BoardContext;
use crate::models::TaskItem;

#[component]
pub fn SubTaskRow(item: TaskItem) -> impl IntoView {
    let ctx = use_context::<BoardContext>().expect("BoardContext should be provided");

    let id = item.id;
    let completed = item.completed;

    view! {
        <li class=if completed { "sub-list-item task-completed" } else { "sub-list-item" }>
            <label class="sub-list-main">
                <input
                    type="checkbox"
                    class="task-check"
                    prop:checked=completed
                    on:change=move |_| ctx.toggle_completed(id)
                />
                <span class="task-text">{item.text}</span>
            </label>
            <button
                type="button"
                class="delete-main"
                title="Delete task"
                on:click=move |_| ctx.delete(id)
            >
                "×"
            </button>
        </li>
    }
}
