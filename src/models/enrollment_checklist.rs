//! Enrollment checklist model
//!
//! The eligibility screening completed for a household member before consent.
//! The consent must agree with the member's eligible checklist.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::traits::EntityModel;
use crate::models::types::{Gender, YesNo, YesNoNa};

/// Eligibility screening for a household member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentChecklist {
    /// Record identifier
    pub id: Uuid,
    /// The screened household member
    pub household_member: Uuid,
    /// When the checklist was completed
    pub report_datetime: DateTime<Utc>,
    /// Date of birth given at screening
    pub dob: NaiveDate,
    /// Gender given at screening
    pub gender: Gender,
    /// Initials given at screening
    pub initials: String,
    /// Whether the member is a citizen
    pub citizen: YesNo,
    /// Whether the member is literate or has a literate witness
    pub literacy: YesNo,
    /// Whether a guardian is available for a minor
    pub guardian: YesNoNa,
    /// Whether a non-citizen is legally married to a citizen
    pub legal_marriage: YesNoNa,
    /// Whether the marriage certificate was presented
    pub marriage_certificate: YesNoNa,
    /// Overall screening outcome
    pub is_eligible: bool,
}

impl EntityModel for EnrollmentChecklist {
    type Id = Uuid;

    const VERBOSE_NAME: &'static str = "Enrollment Checklist";

    fn id(&self) -> &Uuid {
        &self.id
    }
}
