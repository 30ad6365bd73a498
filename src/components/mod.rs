//! UI Components

mod add_task_form;
mod error_display;
mod field_input;
mod navbar;
mod status_cards;
mod task_item;
mod task_list;

pub use add_task_form::AddTaskForm;
pub use error_display::ErrorDisplay;
pub use field_input::FieldInput;
pub use navbar::Navbar;
pub use status_cards::StatusCards;
pub use task_item::TaskItem;
pub use task_list::TaskList;
