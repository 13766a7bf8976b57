//! Batch review of consents
//!
//! Every consent is resolved and validated independently, so a batch is
//! checked in parallel with rayon. Results keep the input order.

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::algorithm::consent::context::{ConsentContext, ConsentLookup};
use crate::algorithm::consent::validator::ConsentValidator;
use crate::error::{ConsentValidationError, ValidationReason};
use crate::models::SubjectConsent;

/// Result of reviewing one consent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// All rules passed
    Valid,
    /// A rule rejected the consent
    Rejected(ConsentValidationError),
    /// Related records could not be resolved
    Unresolved {
        /// Lookup error message
        error: String,
    },
}

/// Review outcome for one consent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Consent record id
    pub consent_id: Uuid,
    /// Consent label
    pub consent: String,
    /// Outcome
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl ValidationOutcome {
    /// Whether the consent passed all rules
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.status, OutcomeStatus::Valid)
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            OutcomeStatus::Valid => write!(f, "{}: valid", self.consent),
            OutcomeStatus::Rejected(e) => {
                write!(f, "{}: rejected [{}] {}", self.consent, e.reason, e.message)
            }
            OutcomeStatus::Unresolved { error } => {
                write!(f, "{}: unresolved {}", self.consent, error)
            }
        }
    }
}

/// Validate many consents in parallel
pub fn validate_all<L>(
    validator: &ConsentValidator,
    lookup: &L,
    consents: &[SubjectConsent],
) -> Vec<ValidationOutcome>
where
    L: ConsentLookup + Sync + ?Sized,
{
    consents
        .par_iter()
        .map(|consent| {
            let status = match ConsentContext::resolve(lookup, consent) {
                Ok(context) => match validator.validate(consent, &context) {
                    Ok(()) => OutcomeStatus::Valid,
                    Err(e) => OutcomeStatus::Rejected(e),
                },
                Err(e) => OutcomeStatus::Unresolved {
                    error: e.to_string(),
                },
            };
            ValidationOutcome {
                consent_id: consent.id,
                consent: consent.to_string(),
                status,
            }
        })
        .collect()
}

/// Counts over a batch of outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Number of consents reviewed
    pub total: usize,
    /// Number that passed
    pub valid: usize,
    /// Rejections per rule
    pub rejected: BTreeMap<ValidationReason, usize>,
    /// Number whose related records could not be resolved
    pub unresolved: usize,
}

impl ValidationSummary {
    /// Summarise a batch of outcomes
    #[must_use]
    pub fn from_outcomes(outcomes: &[ValidationOutcome]) -> Self {
        let rejected = outcomes
            .iter()
            .filter_map(|outcome| match &outcome.status {
                OutcomeStatus::Rejected(e) => Some(e.reason),
                _ => None,
            })
            .counts()
            .into_iter()
            .collect();
        Self {
            total: outcomes.len(),
            valid: outcomes.iter().filter(|o| o.is_valid()).count(),
            rejected,
            unresolved: outcomes
                .iter()
                .filter(|o| matches!(o.status, OutcomeStatus::Unresolved { .. }))
                .count(),
        }
    }

    /// Whether every consent passed
    #[must_use]
    pub const fn all_valid(&self) -> bool {
        self.valid == self.total
    }
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Reviewed {} consents: {} valid", self.total, self.valid)?;
        for (reason, count) in &self.rejected {
            writeln!(f, "  {reason}: {count}")?;
        }
        if self.unresolved > 0 {
            writeln!(f, "  unresolved: {}", self.unresolved)?;
        }
        Ok(())
    }
}
