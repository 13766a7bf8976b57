//! Registered subject model
//!
//! One row per consented subject, keyed by identity. Created by the first
//! saved consent and refreshed by every later one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::subject_consent::SubjectConsent;
use crate::models::traits::EntityModel;
use crate::models::types::Gender;

/// Registration of a consented subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredSubject {
    /// Record identifier
    pub id: Uuid,
    /// Study subject identifier
    pub subject_identifier: String,
    /// Identity document number
    pub identity: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Initials
    pub initials: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Gender
    pub gender: Gender,
    /// Study site the subject registered at
    pub study_site: String,
    /// When the subject was first registered
    pub registration_datetime: DateTime<Utc>,
    /// Timestamp of the latest consent
    pub consent_datetime: DateTime<Utc>,
}

impl RegisteredSubject {
    /// Register a subject from a consent that already carries an identifier
    #[must_use]
    pub fn from_consent(subject_identifier: &str, consent: &SubjectConsent) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject_identifier: subject_identifier.to_string(),
            identity: consent.identity.identity.clone(),
            first_name: consent.personal.first_name.clone(),
            last_name: consent.personal.last_name.clone(),
            initials: consent.personal.initials.clone(),
            dob: consent.personal.dob,
            gender: consent.personal.gender,
            study_site: consent.study_site.clone(),
            registration_datetime: consent.consent_datetime,
            consent_datetime: consent.consent_datetime,
        }
    }

    /// Refresh personal details from a later consent
    pub fn update_from_consent(&mut self, consent: &SubjectConsent) {
        self.first_name.clone_from(&consent.personal.first_name);
        self.last_name.clone_from(&consent.personal.last_name);
        self.initials.clone_from(&consent.personal.initials);
        self.dob = consent.personal.dob;
        self.gender = consent.personal.gender;
        self.consent_datetime = consent.consent_datetime;
    }
}

impl EntityModel for RegisteredSubject {
    type Id = Uuid;

    const VERBOSE_NAME: &'static str = "Registered Subject";

    fn id(&self) -> &Uuid {
        &self.id
    }
}
