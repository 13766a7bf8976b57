//! Standardized collection traits
//!
//! This module defines the trait for collections of records, providing a
//! unified interface for adding, getting and filtering items.

use crate::models::traits::EntityModel;
use std::sync::Arc;

/// Core trait for model collections
///
/// This trait provides the fundamental operations that all model collections
/// should support, including adding, getting, and listing items.
pub trait ModelCollection<T: EntityModel>: Send + Sync + std::fmt::Debug {
    /// Add a model to the collection, replacing any model with the same id
    fn add(&mut self, model: T);

    /// Get a model by its identifier
    fn get(&self, id: &T::Id) -> Option<Arc<T>>;

    /// Get all models in the collection
    fn all(&self) -> Vec<Arc<T>>;

    /// Count the total number of models in the collection
    fn count(&self) -> usize;

    /// Filter models by a predicate function
    fn filter<F>(&self, predicate: F) -> Vec<Arc<T>>
    where
        F: Fn(&T) -> bool;

    /// Check if the collection contains a model with the given ID
    fn contains(&self, id: &T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Add multiple models to the collection
    fn add_all(&mut self, models: Vec<T>) {
        for model in models {
            self.add(model);
        }
    }
}
