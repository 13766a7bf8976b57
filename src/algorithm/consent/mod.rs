//! Informed consent cross-validation
//!
//! This module contains the minor determination, the lookup seam for the
//! records a consent is checked against, the ordered rule set itself and a
//! parallel batch runner for reviewing many consents at once.

pub mod batch;
pub mod context;
pub mod minor;
pub mod validator;

pub use batch::{OutcomeStatus, ValidationOutcome, ValidationSummary, validate_all};
pub use context::{ConsentContext, ConsentLookup};
pub use minor::{age_in_years, is_minor};
pub use validator::ConsentValidator;
