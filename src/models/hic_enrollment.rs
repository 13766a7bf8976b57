//! HIC enrollment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::traits::EntityModel;
use crate::models::types::YesNo;

/// Enrollment into the HIV incidence cohort, captured at a subject visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HicEnrollment {
    /// Record identifier
    pub id: Uuid,
    /// Household member the visit belongs to
    pub household_member: Uuid,
    /// Visit the enrollment was captured at
    #[serde(default)]
    pub subject_visit: Option<Uuid>,
    /// When the enrollment was completed
    pub report_datetime: DateTime<Utc>,
    /// Whether the subject agreed to join the cohort
    pub hic_permission: YesNo,
    /// Date of birth recorded on the enrollment, when captured
    #[serde(default)]
    pub dob: Option<NaiveDate>,
}

impl EntityModel for HicEnrollment {
    type Id = Uuid;

    const VERBOSE_NAME: &'static str = "HIC Enrollment";

    fn id(&self) -> &Uuid {
        &self.id
    }
}
