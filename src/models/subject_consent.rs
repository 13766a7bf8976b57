//! Subject consent model
//!
//! The informed consent form for one subject and consent version. Fields are
//! grouped into the sections of the paper form; the groups are flattened when
//! serialized so a record reads as one flat form.
//!
//! `is_minor` and `is_signed` are derived. They cannot be supplied from
//! outside the crate and are recomputed by [`SubjectConsent::refresh_derived`],
//! which the consent service calls on every save.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::algorithm::consent::minor::is_minor;
use crate::models::traits::EntityModel;
use crate::models::types::{Gender, IdentityType, YesNo, YesNoNa};

/// Identity document fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFields {
    /// Identity document number
    pub identity: String,
    /// Type of identity document
    #[serde(default)]
    pub identity_type: IdentityType,
    /// Identity number re-entered for confirmation
    pub confirm_identity: String,
}

/// Consent review questions answered by the research assistant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewFields {
    /// Consent was reviewed with the subject
    #[serde(default = "default_yes")]
    pub consent_reviewed: YesNo,
    /// Subject's questions were answered
    #[serde(default = "default_yes")]
    pub study_questions: YesNo,
    /// Subject passed the comprehension assessment
    #[serde(default = "default_yes")]
    pub assessment_score: YesNo,
    /// Subject signed the consent form
    #[serde(default = "default_yes")]
    pub consent_signature: YesNo,
    /// Subject was offered a copy of the consent
    #[serde(default = "default_yes")]
    pub consent_copy: YesNo,
}

impl Default for ReviewFields {
    fn default() -> Self {
        Self {
            consent_reviewed: YesNo::Yes,
            study_questions: YesNo::Yes,
            assessment_score: YesNo::Yes,
            consent_signature: YesNo::Yes,
            consent_copy: YesNo::Yes,
        }
    }
}

/// Personal details of the subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalFields {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Initials
    pub initials: String,
    /// Date of birth
    pub dob: NaiveDate,
    /// Whether the date of birth is an estimate
    #[serde(default = "default_no")]
    pub is_dob_estimated: YesNo,
    /// Gender
    pub gender: Gender,
    /// Guardian name, required for minors
    #[serde(default)]
    pub guardian_name: Option<String>,
}

/// Literacy and language of the subject
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityFields {
    /// Language the consent was administered in
    #[serde(default = "default_language")]
    pub language: String,
    /// Whether the subject is literate
    pub is_literate: YesNo,
    /// Literate witness for a subject who is not literate
    #[serde(default)]
    pub witness_name: Option<String>,
}

/// Citizenship and citizenship-by-marriage answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenFields {
    /// Whether the subject is a citizen
    pub citizen: YesNo,
    /// Whether a non-citizen is legally married to a citizen
    pub legal_marriage: YesNoNa,
    /// Whether the marriage certificate was presented
    pub marriage_certificate: YesNoNa,
    /// Marriage certificate number, when presented
    #[serde(default)]
    pub marriage_certificate_no: Option<String>,
}

impl CitizenFields {
    /// Answers for a citizen
    #[must_use]
    pub const fn citizen() -> Self {
        Self {
            citizen: YesNo::Yes,
            legal_marriage: YesNoNa::NotApplicable,
            marriage_certificate: YesNoNa::NotApplicable,
            marriage_certificate_no: None,
        }
    }
}

/// Specimen storage consent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCollectionFields {
    /// Whether samples may be stored for future testing
    #[serde(default = "default_yes")]
    pub may_store_samples: YesNo,
}

impl Default for SampleCollectionFields {
    fn default() -> Self {
        Self {
            may_store_samples: YesNo::Yes,
        }
    }
}

const fn default_yes() -> YesNo {
    YesNo::Yes
}

const fn default_no() -> YesNo {
    YesNo::No
}

fn default_language() -> String {
    "English".to_string()
}

/// The informed consent form for one subject and consent version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectConsent {
    /// Record identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Study subject identifier, assigned on first save
    #[serde(default)]
    pub subject_identifier: Option<String>,
    /// Consenting household member
    pub household_member: Uuid,
    /// Survey the consent was captured in
    pub survey: String,
    /// Study site
    pub study_site: String,
    /// Consent version
    pub version: String,
    /// When consent was given
    pub consent_datetime: DateTime<Utc>,
    /// Identity document section
    #[serde(flatten)]
    pub identity: IdentityFields,
    /// Review section
    #[serde(flatten)]
    pub review: ReviewFields,
    /// Personal details section
    #[serde(flatten)]
    pub personal: PersonalFields,
    /// Literacy section
    #[serde(flatten)]
    pub vulnerability: VulnerabilityFields,
    /// Citizenship section
    #[serde(flatten)]
    pub citizenship: CitizenFields,
    /// Specimen storage section
    #[serde(flatten)]
    pub samples: SampleCollectionFields,
    #[serde(skip_deserializing)]
    is_minor: bool,
    #[serde(skip_deserializing)]
    is_signed: bool,
}

impl SubjectConsent {
    /// Create a new consent with default review and sample answers.
    ///
    /// The derived flags are computed immediately.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        household_member: Uuid,
        survey: &str,
        study_site: &str,
        version: &str,
        consent_datetime: DateTime<Utc>,
        identity: IdentityFields,
        personal: PersonalFields,
        vulnerability: VulnerabilityFields,
        citizenship: CitizenFields,
    ) -> Self {
        let mut consent = Self {
            id: Uuid::new_v4(),
            subject_identifier: None,
            household_member,
            survey: survey.to_string(),
            study_site: study_site.to_string(),
            version: version.to_string(),
            consent_datetime,
            identity,
            review: ReviewFields::default(),
            personal,
            vulnerability,
            citizenship,
            samples: SampleCollectionFields::default(),
            is_minor: false,
            is_signed: false,
        };
        consent.refresh_derived();
        consent
    }

    /// Whether the subject was 16 or 17 at consent, as of the last save
    #[must_use]
    pub const fn is_minor(&self) -> bool {
        self.is_minor
    }

    /// Whether the subject signed the consent, as of the last save
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.is_signed
    }

    /// Recompute the derived flags from the current field values
    pub fn refresh_derived(&mut self) {
        self.is_minor = is_minor(self.personal.dob, self.consent_datetime);
        self.is_signed = self.review.consent_signature.is_yes();
    }

    /// Key of the (subject identifier, version) constraint
    #[must_use]
    pub fn identifier_version_key(&self) -> Option<(&str, &str)> {
        self.subject_identifier
            .as_deref()
            .map(|identifier| (identifier, self.version.as_str()))
    }

    /// Key of the (first name, dob, initials, version) constraint
    #[must_use]
    pub fn personal_version_key(&self) -> (&str, NaiveDate, &str, &str) {
        (
            self.personal.first_name.as_str(),
            self.personal.dob,
            self.personal.initials.as_str(),
            self.version.as_str(),
        )
    }
}

impl fmt::Display for SubjectConsent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) V{}",
            self.subject_identifier.as_deref().unwrap_or("?"),
            self.survey,
            self.version
        )
    }
}

impl EntityModel for SubjectConsent {
    type Id = Uuid;

    const VERBOSE_NAME: &'static str = "Subject Consent";

    fn id(&self) -> &Uuid {
        &self.id
    }
}
