//! UI Components
//!
//! Leptos components for the task list page.

mod new_task_form;
mod todo_item;
mod task_list_view;
mod error_banner;

pub use new_task_form::NewTaskForm;
pub use todo_item::TodoItem;
pub use task_list_view::TaskListView;
pub use error_banner::ErrorBanner;
