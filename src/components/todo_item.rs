//! Todo Item Component
//!
//! One task row: checkbox, label, delete button.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::models::TaskRow;

/// A single task row. Handlers are bound to the task id, not its position.
#[component]
pub fn TodoItem(row: TaskRow) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    let TaskRow { id, text, completed, input_id } = row;

    view! {
        <li class="todo">
            <input
                type="checkbox"
                id=input_id.clone()
                prop:checked=completed
                on:change=move |ev| ctx.set_completed(id, event_target_checked(&ev))
            />
            <label class="custom-checkbox" for=input_id.clone()>"✓"</label>
            <label class="todo-text" for=input_id>{text}</label>
            <button class="delete-button" title="Delete" on:click=move |_| ctx.delete_task(id)>
                "×"
            </button>
        </li>
    }
}
