//! New Task Form Component
//!
//! Text input and submit button for adding tasks.

use leptos::prelude::*;

use crate::context::TodoContext;

/// Form for adding a task at the end of the list
#[component]
pub fn NewTaskForm(placeholder: &'static str) -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-form" on:submit=add_task>
            <input
                type="text"
                id="todo-input"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-button">"Add"</button>
        </form>
    }
}
