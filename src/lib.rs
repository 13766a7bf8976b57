//! Informed consent cross-validation and enrollment for the BCPP subject
//! case report forms.
//!
//! A consent is checked against the consenting household member, the
//! member's eligibility checklist and any HIC enrollment before it is saved.
//! The crate also assigns subject identifiers, keeps an audit trail of saved
//! consents and validates the circumcision case report forms.

pub mod algorithm;
pub mod collections;
pub mod common;
pub mod config;
pub mod error;
pub mod forms;
pub mod identifier;
pub mod loader;
pub mod models;
pub mod service;
pub mod utils;

// Re-export the most common types for easier use
pub use algorithm::consent::{
    ConsentContext, ConsentLookup, ConsentValidator, ValidationOutcome, ValidationSummary,
    is_minor, validate_all,
};
pub use collections::ConsentStore;
pub use config::{ConsentConfig, ValidatorConfig};
pub use error::{ConsentError, ConsentValidationError, Result, ValidationReason};
pub use loader::{Dataset, load_dataset};
pub use service::ConsentService;
