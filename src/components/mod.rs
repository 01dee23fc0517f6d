//! UI Components
//!
//! Reusable Leptos components.

mod alert_stack;
mod delete_confirm_button;
mod login_page;
mod new_task_form;
mod pagination;
mod task_page;
mod task_row;

pub use alert_stack::AlertStack;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use new_task_form::NewTaskForm;
pub use pagination::Pagination;
pub use task_page::TaskPage;
pub use task_row::TaskRow;
