//! Common domain type definitions
//!
//! This module contains the choice types shared by the consent, checklist and
//! case report form models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Yes/No answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNo {
    /// Yes
    #[serde(rename = "Yes", alias = "YES", alias = "yes")]
    Yes,
    /// No
    #[serde(rename = "No", alias = "NO", alias = "no")]
    No,
}

impl YesNo {
    /// Whether the answer is Yes
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => f.write_str("Yes"),
            Self::No => f.write_str("No"),
        }
    }
}

/// A Yes/No answer that may not apply to the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YesNoNa {
    /// Yes
    #[serde(rename = "Yes", alias = "YES", alias = "yes")]
    Yes,
    /// No
    #[serde(rename = "No", alias = "NO", alias = "no")]
    No,
    /// Not applicable
    #[serde(rename = "N/A", alias = "not_applicable")]
    NotApplicable,
}

impl YesNoNa {
    /// Whether the answer is Yes
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Gender as recorded on consent and screening forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male gender
    #[serde(rename = "M")]
    Male,
    /// Female gender
    #[serde(rename = "F")]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("M"),
            Self::Female => f.write_str("F"),
        }
    }
}

/// Type of identity document presented at consent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IdentityType {
    /// Botswana national identity card (Omang)
    #[default]
    #[serde(rename = "OMANG")]
    Omang,
    /// Driver's license
    #[serde(rename = "DRIVERS")]
    DriversLicense,
    /// Passport
    #[serde(rename = "PASSPORT")]
    Passport,
    /// Omang receipt while the card is being issued
    #[serde(rename = "OMANG_RCPT")]
    OmangReceipt,
    /// Any other document
    #[serde(rename = "OTHER")]
    Other,
}

/// Unit used when reporting an age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeUnit {
    /// Age in days
    Days,
    /// Age in months
    Months,
    /// Age in years
    Years,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_serde_names() {
        let value: YesNo = serde_json::from_str("\"YES\"").unwrap();
        assert_eq!(value, YesNo::Yes);
        assert_eq!(serde_json::to_string(&YesNo::No).unwrap(), "\"No\"");
        let na: YesNoNa = serde_json::from_str("\"N/A\"").unwrap();
        assert_eq!(na, YesNoNa::NotApplicable);
    }
}
