//! Algorithms operating on consent records

pub mod consent;
