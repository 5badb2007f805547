//! WellNest: a health and wellness to-do list served over HTTP.
//!
//! Two independent services share this crate:
//!
//! - the task service ([`api::create_task_router`]): wellness tasks with
//!   deadlines, notes, attachments and analytics, plus an HTML front-end
//! - the item service ([`api::create_item_router`]): a minimal categorized
//!   list addressed by position, documented with OpenAPI
//!
//! Both keep their data in the in-memory stores from `wellnest-core`.

pub mod api;
pub mod uploads;

pub use wellnest_core::{models, store};
