//! Task List View Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::TodoContext;

/// Rebuilds every row whenever the list changes
#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = expect_context::<TodoContext>();

    view! {
        <ul id="todo-list">
            {move || {
                ctx.todos
                    .with(|store| store.render())
                    .into_iter()
                    .map(|row| view! { <TodoItem row=row /> })
                    .collect_view()
            }}
        </ul>
    }
}
