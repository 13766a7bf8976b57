//! Standardized model collections
//!
//! This module provides the generic collection used for every record type and
//! the in-memory [`ConsentStore`] that ties them together.

pub mod store;

pub use store::ConsentStore;

use crate::common::traits::ModelCollection;
use crate::models::traits::EntityModel;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Generic model collection implementation
///
/// Stores models in a hash map indexed by their ID.
#[derive(Debug)]
pub struct GenericCollection<T: EntityModel> {
    /// Models indexed by ID
    items: FxHashMap<T::Id, Arc<T>>,
}

impl<T: EntityModel> GenericCollection<T> {
    /// Create a new empty collection
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: FxHashMap::default(),
        }
    }

    /// Create a collection from a vector of models
    #[must_use]
    pub fn from_models(models: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.add_all(models);
        collection
    }

    /// Find the first model matching a predicate
    pub fn find<F>(&self, predicate: F) -> Option<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items.values().find(|model| predicate(model)).cloned()
    }
}

impl<T: EntityModel> Default for GenericCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EntityModel> ModelCollection<T> for GenericCollection<T> {
    fn add(&mut self, model: T) {
        let id = model.id().clone();
        self.items.insert(id, Arc::new(model));
    }

    fn get(&self, id: &T::Id) -> Option<Arc<T>> {
        self.items.get(id).cloned()
    }

    fn all(&self) -> Vec<Arc<T>> {
        self.items.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.items
            .values()
            .filter(|model| predicate(model))
            .cloned()
            .collect()
    }
}
