//! Core library for WellNest.
//!
//! This crate provides the domain models, analytics and in-memory stores for
//! the WellNest task and item services, independent of any transport layer.
//!
//! # Usage
//!
//! ```no_run
//! use wellnest_core::models::*;
//! use wellnest_core::store::TaskStore;
//!
//! let store = TaskStore::seeded();
//!
//! let active = store.list_tasks(&TaskQuery::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod models;
pub mod store;

// Re-export commonly used types at crate root
pub use store::{ItemStore, TaskStore};
