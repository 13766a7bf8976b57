//! Error handling for consent validation and enrollment.

pub mod util;

use std::fmt;
use std::io;

use serde::Serialize;

/// Reason code attached to every consent cross-validation failure.
///
/// The variants are listed in the order the validator checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    /// The household member is not flagged as eligible
    IneligibleMember,
    /// The HIC enrollment carries a different date of birth
    DobConflict,
    /// No eligible enrollment checklist exists for the member
    MissingChecklist,
    /// Date of birth differs from the enrollment checklist
    DobMismatch,
    /// Gender differs from the enrollment checklist
    GenderMismatch,
    /// Subject is a minor but no guardian is recorded
    GuardianRequired,
    /// Initials differ from the enrollment checklist
    InitialsMismatch,
    /// Citizenship differs from the enrollment checklist
    CitizenshipMismatch,
    /// Literacy answers are inconsistent with the enrollment checklist
    LiteracyMismatch,
    /// Marriage answers of a non-citizen differ from the enrollment checklist
    MarriageCitizenshipMismatch,
}

impl ValidationReason {
    /// All reasons in rule order
    pub const ALL: [Self; 10] = [
        Self::IneligibleMember,
        Self::DobConflict,
        Self::MissingChecklist,
        Self::DobMismatch,
        Self::GenderMismatch,
        Self::GuardianRequired,
        Self::InitialsMismatch,
        Self::CitizenshipMismatch,
        Self::LiteracyMismatch,
        Self::MarriageCitizenshipMismatch,
    ];

    /// Stable snake_case code, used in reports
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::IneligibleMember => "ineligible_member",
            Self::DobConflict => "dob_conflict",
            Self::MissingChecklist => "missing_checklist",
            Self::DobMismatch => "dob_mismatch",
            Self::GenderMismatch => "gender_mismatch",
            Self::GuardianRequired => "guardian_required",
            Self::InitialsMismatch => "initials_mismatch",
            Self::CitizenshipMismatch => "citizenship_mismatch",
            Self::LiteracyMismatch => "literacy_mismatch",
            Self::MarriageCitizenshipMismatch => "marriage_citizenship_mismatch",
        }
    }

    /// Consent form field the failure should be reported against.
    ///
    /// `None` means the failure concerns the record as a whole.
    #[must_use]
    pub const fn field(self) -> Option<&'static str> {
        match self {
            Self::IneligibleMember | Self::MissingChecklist => None,
            Self::DobConflict | Self::DobMismatch => Some("dob"),
            Self::GenderMismatch => Some("gender"),
            Self::GuardianRequired => Some("guardian_name"),
            Self::InitialsMismatch => Some("initials"),
            Self::CitizenshipMismatch => Some("citizen"),
            Self::LiteracyMismatch => Some("is_literate"),
            Self::MarriageCitizenshipMismatch => Some("legal_marriage"),
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A consent record failed cross-validation against its sibling records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct ConsentValidationError {
    /// Which rule rejected the record
    pub reason: ValidationReason,
    /// Human-readable message naming the conflicting record
    pub message: String,
}

impl ConsentValidationError {
    /// Create a new validation error
    pub fn new(reason: ValidationReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Crate-wide error type
#[derive(Debug, thiserror::Error)]
pub enum ConsentError {
    /// Cross-validation rejected the consent
    #[error("Consent validation error: {0}")]
    Validation(#[from] ConsentValidationError),

    /// A referenced record does not exist
    #[error("{model} not found: {key}")]
    NotFound {
        /// Descriptive label of the record type
        model: &'static str,
        /// Lookup key that was used
        key: String,
    },

    /// A lookup expected at most one record but found several
    #[error("Multiple {model} records returned for {key}")]
    MultipleRecords {
        /// Descriptive label of the record type
        model: &'static str,
        /// Lookup key that was used
        key: String,
    },

    /// A uniqueness constraint would be violated
    #[error("Duplicate subject consent: {constraint} already exists ({key})")]
    Duplicate {
        /// Name of the violated constraint
        constraint: &'static str,
        /// Conflicting values
        key: String,
    },

    /// Subject identifier could not be allocated
    #[error("Identifier error: {0}")]
    Identifier(String),

    /// Invalid settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error with an optional path for context
    #[error("IO error: {message}")]
    Io {
        /// Description of what failed
        message: String,
        /// Underlying error
        #[source]
        source: Option<io::Error>,
    },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConsentError {
    /// Create an IO error from a message
    pub fn io_error(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an IO error wrapping the original error
    pub fn io_error_with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// The validation failure, if this error is one
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ConsentValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }

    /// The validation reason, if this error is a validation failure
    #[must_use]
    pub fn reason(&self) -> Option<ValidationReason> {
        self.as_validation().map(|e| e.reason)
    }
}

impl From<io::Error> for ConsentError {
    fn from(error: io::Error) -> Self {
        Self::io_error_with_source(error.to_string(), error)
    }
}

/// Result type for consent operations
pub type Result<T> = std::result::Result<T, ConsentError>;
