//! Household member model
//!
//! A person enumerated in a household. Members are owned by the household
//! survey and only read by the consent workflow.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::traits::EntityModel;
use crate::models::types::{Gender, YesNo};

/// A person enumerated in a household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdMember {
    /// Record identifier
    pub id: Uuid,
    /// First name as enumerated
    pub first_name: String,
    /// Initials as enumerated
    pub initials: String,
    /// Gender as enumerated
    pub gender: Gender,
    /// Age reported at enumeration
    pub age_in_years: u32,
    /// Whether the member passed household eligibility
    pub eligible_subject: bool,
    /// Whether the member's personal details were changed after enumeration
    #[serde(default = "default_personal_details_changed")]
    pub personal_details_changed: YesNo,
}

const fn default_personal_details_changed() -> YesNo {
    YesNo::No
}

impl HouseholdMember {
    /// Create an eligible member with unchanged personal details
    #[must_use]
    pub fn new(first_name: &str, initials: &str, gender: Gender, age_in_years: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.to_string(),
            initials: initials.to_string(),
            gender,
            age_in_years,
            eligible_subject: true,
            personal_details_changed: YesNo::No,
        }
    }
}

impl EntityModel for HouseholdMember {
    type Id = Uuid;

    const VERBOSE_NAME: &'static str = "Household Member";

    fn id(&self) -> &Uuid {
        &self.id
    }
}
