//! Domain models for subject consent
//!
//! The records a consent is checked against are owned by the household and
//! screening workflows; this crate only reads them.

pub mod enrollment_checklist;
pub mod hic_enrollment;
pub mod household_member;
pub mod registered_subject;
pub mod subject_consent;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use enrollment_checklist::EnrollmentChecklist;
pub use hic_enrollment::HicEnrollment;
pub use household_member::HouseholdMember;
pub use registered_subject::RegisteredSubject;
pub use subject_consent::{
    CitizenFields, IdentityFields, PersonalFields, ReviewFields, SampleCollectionFields,
    SubjectConsent, VulnerabilityFields,
};
pub use traits::EntityModel;
