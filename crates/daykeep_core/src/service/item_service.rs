//! Item use-case service.
//!
//! # Responsibility
//! - Provide item create/edit/list/delete entry points for host callers.
//! - Combine persistence reads with the pure tab view derivation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Persistence failures pass through unchanged; the service neither
//!   retries nor suppresses them.

use crate::model::category::Category;
use crate::model::item::{Item, ItemId};
use crate::model::tag::{Tag, TagId};
use crate::repo::item_repo::{ItemListQuery, ItemRepository, RepoError, RepoResult};
use crate::repo::tag_repo::TagRepository;
use crate::view::filter_and_sort;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for item use-cases.
#[derive(Debug)]
pub enum ItemServiceError {
    /// Target item does not exist.
    ItemNotFound(ItemId),
    /// Persistence-layer failure, passed through unchanged.
    Repo(RepoError),
}

impl Display for ItemServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ItemNotFound(id) => write!(f, "item not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ItemServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::ItemNotFound(_) => None,
        }
    }
}

impl From<RepoError> for ItemServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ItemNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Use-case facade over the injected store capability.
pub struct ItemService<S: ItemRepository + TagRepository> {
    store: S,
}

impl<S: ItemRepository + TagRepository> ItemService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates and persists a blank item with form defaults.
    ///
    /// The host edit flow seeds its form either from this or from a clone
    /// of an existing item, then saves through `update_item`.
    pub fn create_blank(&mut self) -> Result<Item, ItemServiceError> {
        let item = Item::new();
        self.store.create_item(&item)?;
        Ok(item)
    }

    /// Persists a fully populated item aggregate.
    pub fn create_item(&mut self, item: &Item) -> Result<ItemId, ItemServiceError> {
        Ok(self.store.create_item(item)?)
    }

    /// Saves edits to an existing item (whole-aggregate replacement).
    pub fn update_item(&mut self, item: &Item) -> Result<(), ItemServiceError> {
        Ok(self.store.update_item(item)?)
    }

    /// Loads one item by id.
    pub fn get_item(&self, id: ItemId) -> Result<Item, ItemServiceError> {
        self.store
            .get_item(id)?
            .ok_or(ItemServiceError::ItemNotFound(id))
    }

    /// Lists item aggregates without view shaping.
    pub fn list_items(&self, query: &ItemListQuery) -> Result<Vec<Item>, ItemServiceError> {
        Ok(self.store.list_items(query)?)
    }

    /// Returns the ordered items for one tab.
    ///
    /// Reads the full collection and applies the pure view derivation, so
    /// the result is recomputed (never cached) on every call.
    pub fn list_tab(&self, active_tab: Category) -> Result<Vec<Item>, ItemServiceError> {
        let items = self.store.list_items(&ItemListQuery::default())?;
        Ok(filter_and_sort(&items, active_tab)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Deletes an item, cascading its owned tasks; attached tags survive.
    pub fn delete_item(&mut self, id: ItemId) -> Result<(), ItemServiceError> {
        Ok(self.store.delete_item(id)?)
    }

    /// Creates an independent tag.
    pub fn create_tag(&mut self, tag: &Tag) -> Result<TagId, ItemServiceError> {
        Ok(self.store.create_tag(tag)?)
    }

    /// Lists all tags sorted by name.
    pub fn list_tags(&self) -> Result<Vec<Tag>, ItemServiceError> {
        Ok(self.store.list_tags()?)
    }

    /// Deletes a tag everywhere it is attached.
    pub fn delete_tag(&mut self, id: TagId) -> Result<(), ItemServiceError> {
        Ok(self.store.delete_tag(id)?)
    }

    /// Attaches a tag to an item; repeat attaches are no-ops.
    pub fn attach_tag(&mut self, item_id: ItemId, tag_id: TagId) -> Result<(), ItemServiceError> {
        Ok(self.store.attach_tag(item_id, tag_id)?)
    }

    /// Detaches a tag from an item without affecting the tag itself.
    pub fn detach_tag(&mut self, item_id: ItemId, tag_id: TagId) -> Result<(), ItemServiceError> {
        Ok(self.store.detach_tag(item_id, tag_id)?)
    }

    /// Returns the tags attached to one item.
    pub fn tags_for_item(&self, item_id: ItemId) -> Result<Vec<Tag>, ItemServiceError> {
        Ok(self.store.tags_for_item(item_id)?)
    }
}
