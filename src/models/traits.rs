//! Trait definitions for domain models
//!
//! This module defines the core trait that every stored record implements.

use std::hash::Hash;

/// A trait that all stored records must implement.
///
/// The `EntityModel` trait provides identifier access so records can be
/// kept in the generic collections.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Descriptive label used in messages, e.g. "Enrollment Checklist"
    const VERBOSE_NAME: &'static str;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;
}
