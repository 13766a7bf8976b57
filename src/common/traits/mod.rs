//! Standardized traits

pub mod collection;

pub use collection::ModelCollection;
