//! Common traits shared across the crate

pub mod traits;
