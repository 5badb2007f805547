mod analytics;
mod item;
mod task;

pub use analytics::*;
pub use item::*;
pub use task::*;
