//! Menu catalog store
//!
//! Owns the set of orderable items. Every mutation rewrites the whole
//! catalog into its slot. There is no stock concept: placing an order never
//! decrements anything here.

pub mod seed;

use crate::storage::{MENU_SLOT, SlotStore, StorageResult};
use shared::models::{MenuItem, MenuItemCreate};
use shared::util;

/// Menu catalog backed by the `menu` slot
pub struct MenuCatalog {
    store: SlotStore,
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Load the catalog from its slot, seeding the starter menu when the
    /// slot is absent or unreadable.
    ///
    /// Items persisted before the availability flag existed load with
    /// `is_available = true` (serde default on the model).
    pub fn load(store: SlotStore) -> Self {
        let items = store.load_or_default(MENU_SLOT, seed::starter_menu);
        Self { store, items }
    }

    /// Full catalog, as the admin view sees it
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Customer-visible subset
    pub fn available_items(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.is_available).collect()
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Assign a fresh id and append. No duplicate-name check: two stalls'
    /// worth of "Es Jeruk" is the operator's problem, not the store's.
    pub fn add(&mut self, create: MenuItemCreate) -> StorageResult<MenuItem> {
        let item = MenuItem {
            id: util::resource_id().to_string(),
            name: create.name,
            description: create.description,
            price: create.price,
            image: create.image,
            category: create.category,
            is_popular: create.is_popular.unwrap_or(false),
            is_available: true,
        };
        self.items.push(item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Replace the matching-id record wholesale. Unknown id is a silent
    /// no-op; the catalog is still re-persisted.
    pub fn update(&mut self, updated: MenuItem) -> StorageResult<()> {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == updated.id) {
            *existing = updated;
        }
        self.persist()
    }

    /// Remove the matching-id record; no-op if absent. Orders keep their
    /// embedded copies.
    pub fn delete(&mut self, id: &str) -> StorageResult<()> {
        self.items.retain(|i| i.id != id);
        self.persist()
    }

    /// Availability is not a primitive: flip the flag and go through
    /// [`MenuCatalog::update`], sharing its replace-wholesale semantics.
    pub fn toggle_availability(&mut self, id: &str) -> StorageResult<()> {
        if let Some(item) = self.get(id) {
            let mut flipped = item.clone();
            flipped.is_available = !flipped.is_available;
            self.update(flipped)?;
        }
        Ok(())
    }

    fn persist(&self) -> StorageResult<()> {
        self.store.write_slot(MENU_SLOT, &self.items)
    }
}
