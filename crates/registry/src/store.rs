use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shelf_core::{Item, ItemId, RegistryError};

/// In-memory registry of items, keyed by id.
///
/// Created empty at process start and shared across handlers behind an
/// `Arc`; nothing survives a restart. Every operation takes the lock once,
/// so each is atomic with respect to the others. Callers are expected to
/// pass already-validated items (the `Item` constructor guarantees this) and,
/// on `update`, an item whose id matches the lookup key.
#[derive(Debug)]
pub struct ItemRegistry {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Insert a new item under its own id.
    ///
    /// Fails with [`RegistryError::AlreadyExists`] when the id is already a
    /// key; the existing entry is left untouched.
    pub fn create(&self, item: Item) -> Result<Item, RegistryError> {
        let mut items = self.items.write().unwrap();
        if items.contains_key(&item.id()) {
            return Err(RegistryError::AlreadyExists);
        }
        items.insert(item.id(), item.clone());
        Ok(item)
    }

    /// Fetch the item stored under `id`.
    pub fn get(&self, id: ItemId) -> Result<Item, RegistryError> {
        let items = self.items.read().unwrap();
        items.get(&id).cloned().ok_or(RegistryError::NotFound)
    }

    /// Replace the entire value stored under `id` and return the new value.
    ///
    /// Fails with [`RegistryError::NotFound`] when absent; never creates an
    /// entry.
    pub fn update(&self, id: ItemId, item: Item) -> Result<Item, RegistryError> {
        let mut items = self.items.write().unwrap();
        match items.get_mut(&id) {
            Some(stored) => {
                *stored = item.clone();
                Ok(item)
            }
            None => Err(RegistryError::NotFound),
        }
    }

    /// Remove the entry under `id` and return the removed item.
    ///
    /// Fails with [`RegistryError::NotFound`] when absent, including on a
    /// repeat delete of the same id.
    pub fn delete(&self, id: ItemId) -> Result<Item, RegistryError> {
        let mut items = self.items.write().unwrap();
        items.remove(&id).ok_or(RegistryError::NotFound)
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().unwrap().is_empty()
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
