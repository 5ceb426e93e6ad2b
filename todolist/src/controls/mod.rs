//! Stateless controls composed by the root screen.
//!
//! Each control receives plain data plus callbacks and hands intents back up;
//! none of them holds or mutates the task list.

pub mod add_task;
pub mod empty_state;
pub mod task_row;

pub use add_task::{AddTaskInput, InputError};
pub use task_row::RowAction;
