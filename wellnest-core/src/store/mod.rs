//! In-memory stores backing the task and item services.
//!
//! Each store wraps its list in a single coarse lock, so concurrent writers to
//! the same entry race on last-write-wins. Nothing is persisted: a fresh
//! store starts from the seed data.

mod items;
mod seed;
mod tasks;

pub use items::ItemStore;
pub use seed::{seed_items, seed_tasks};
pub use tasks::TaskStore;

use std::sync::{Mutex, MutexGuard};

fn lock<T>(mutex: &Mutex<T>) -> anyhow::Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|e| anyhow::anyhow!("Store lock poisoned: {}", e))
}
