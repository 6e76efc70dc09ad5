//! Todo List App
//!
//! Loads the task list from local storage and lays out the page.

use leptos::prelude::*;
use web_storage::LocalStorage;

use crate::components::{ErrorBanner, NewTaskForm, TaskListView};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::store::TodoStore;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let loaded = TodoStore::load(LocalStorage, config.storage_key);
    let ctx = match loaded {
        Ok(store) => TodoContext::new(store),
        Err(e) => {
            // Keep going in memory; writing now would replace the unread list
            let ctx = TodoContext::new(TodoStore::unsynced(LocalStorage, config.storage_key));
            ctx.report("load saved tasks", format!("{}. Changes in this session will not be saved", e));
            ctx
        }
    };

    // Provide context to all children
    provide_context(ctx);

    view! {
        <div class="wrapper">
            <h1>{config.title}</h1>
            <ErrorBanner />
            <NewTaskForm placeholder=config.placeholder />
            <TaskListView />
            <p class="todo-count">
                {move || ctx.todos.with(|store| format!("{} tasks, {} remaining", store.len(), store.remaining()))}
            </p>
        </div>
    }
}
