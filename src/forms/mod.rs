//! Case report form validation
//!
//! Forms collect every field error instead of stopping at the first one, so
//! a data manager sees all problems with a submission at once.

pub mod circumcision;

pub use circumcision::{CircumcisedForm, CircumcisionBenefit, UncircumcisedForm};

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Field errors of one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    /// Create an empty error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a field
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// Record the standard error for a missing required value
    pub fn require<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.add(field, "This field is required.");
        }
    }

    /// Record a missing error for an absent or blank text answer
    pub fn require_text(&mut self, field: &'static str, value: Option<&str>) {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.add(field, "This field is required.");
        }
    }

    /// Errors recorded against a field
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Whether no errors were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ok when empty, otherwise the errors themselves
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// A case report form that can be cleaned before saving
pub trait CaseReportForm {
    /// Check every field, returning all errors found
    fn clean(&self) -> Result<(), FormErrors>;

    /// Whether the form has no errors
    fn is_valid(&self) -> bool {
        self.clean().is_ok()
    }
}
