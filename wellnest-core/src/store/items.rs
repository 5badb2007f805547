use std::sync::{Arc, Mutex};

use super::{lock, seed_items};
use crate::models::{Category, Item};

/// Position-addressed item list.
///
/// Indices are only stable until an earlier item is removed; every lookup is
/// by current position.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<Mutex<Vec<Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
        }
    }

    pub fn len(&self) -> anyhow::Result<usize> {
        Ok(lock(&self.items)?.len())
    }

    pub fn list_items(&self, category: Option<Category>) -> anyhow::Result<Vec<Item>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .cloned()
            .collect())
    }

    /// Appends and returns the whole list after the insert.
    pub fn create_item(&self, item: Item) -> anyhow::Result<Vec<Item>> {
        let mut items = lock(&self.items)?;
        items.push(item);
        Ok(items.clone())
    }

    pub fn get_item(&self, index: usize) -> anyhow::Result<Option<Item>> {
        Ok(lock(&self.items)?.get(index).cloned())
    }

    /// Replaces the item at `index` wholesale.
    pub fn update_item(&self, index: usize, item: Item) -> anyhow::Result<Option<Item>> {
        let mut items = lock(&self.items)?;
        let Some(slot) = items.get_mut(index) else {
            return Ok(None);
        };
        *slot = item;
        Ok(Some(slot.clone()))
    }

    /// Removes the item at `index`, shifting later items down by one.
    pub fn delete_item(&self, index: usize) -> anyhow::Result<Option<Item>> {
        let mut items = lock(&self.items)?;
        if index >= items.len() {
            return Ok(None);
        }
        Ok(Some(items.remove(index)))
    }
}
