//! UI Components
//!
//! Leptos components for the sub-task board.

mod new_task_form;
mod subtask_row;
mod subtask_list_view;
mod bulk_actions;

pub use new_task_form::NewTaskForm;
pub use subtask_row::SubTaskRow;
pub use subtask_list_view::SubTaskListView;
pub use bulk_actions::BulkActions;
