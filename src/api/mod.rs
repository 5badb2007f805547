mod error;
mod form;
pub mod items;
pub mod tasks;

pub use error::ApiError;
pub use form::{TaskForm, Upload};
pub use items::{create_item_router, ItemApiDoc};
pub use tasks::{create_task_router, TaskState};
