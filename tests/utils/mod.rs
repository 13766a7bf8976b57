//! Shared fixtures for the integration tests
#![allow(dead_code)]

use bcpp_consent::ConsentStore;
use bcpp_consent::models::types::{Gender, IdentityType, YesNo, YesNoNa};
use bcpp_consent::models::{
    CitizenFields, EnrollmentChecklist, HicEnrollment, HouseholdMember, IdentityFields,
    PersonalFields, SubjectConsent, VulnerabilityFields,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

/// Consent timestamp used by all fixtures
#[must_use]
pub fn consent_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 10, 17, 9, 30, 0).unwrap()
}

/// Date of birth that makes the subject `age` on the consent date
#[must_use]
pub fn dob_for_age(age: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2016 - age, 10, 17).unwrap()
}

/// An eligible member, a matching checklist and a consent that passes
#[derive(Debug, Clone)]
pub struct Fixture {
    pub member: HouseholdMember,
    pub checklist: EnrollmentChecklist,
    pub consent: SubjectConsent,
}

impl Fixture {
    /// Adult citizen aged 30 with a matching checklist (literacy = No)
    #[must_use]
    pub fn adult() -> Self {
        Self::aged("ERIK", "SETSHABA", "ES", "317918515", 30)
    }

    /// Matching records for a subject of the given age
    #[must_use]
    pub fn aged(
        first_name: &str,
        last_name: &str,
        initials: &str,
        identity: &str,
        age: i32,
    ) -> Self {
        let dob = dob_for_age(age);
        let member = HouseholdMember::new(first_name, initials, Gender::Male, age as u32);
        let checklist = EnrollmentChecklist {
            id: Uuid::new_v4(),
            household_member: member.id,
            report_datetime: consent_datetime() - chrono::Duration::days(1),
            dob,
            gender: Gender::Male,
            initials: initials.to_string(),
            citizen: YesNo::Yes,
            literacy: YesNo::No,
            guardian: YesNoNa::NotApplicable,
            legal_marriage: YesNoNa::NotApplicable,
            marriage_certificate: YesNoNa::NotApplicable,
            is_eligible: true,
        };
        let consent = SubjectConsent::new(
            member.id,
            "bcpp-year-1",
            "40",
            "1",
            consent_datetime(),
            IdentityFields {
                identity: identity.to_string(),
                identity_type: IdentityType::Omang,
                confirm_identity: identity.to_string(),
            },
            PersonalFields {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                initials: initials.to_string(),
                dob,
                is_dob_estimated: YesNo::No,
                gender: Gender::Male,
                guardian_name: None,
            },
            VulnerabilityFields {
                language: "English".to_string(),
                is_literate: YesNo::Yes,
                witness_name: None,
            },
            CitizenFields::citizen(),
        );
        Self {
            member,
            checklist,
            consent,
        }
    }

    /// A HIC enrollment for the fixture's member
    #[must_use]
    pub fn hic_enrollment(&self, dob: Option<NaiveDate>) -> HicEnrollment {
        HicEnrollment {
            id: Uuid::new_v4(),
            household_member: self.member.id,
            subject_visit: Some(Uuid::new_v4()),
            report_datetime: consent_datetime() + chrono::Duration::days(2),
            hic_permission: YesNo::Yes,
            dob,
        }
    }

    /// Add the member and checklist to a store
    pub fn add_to(&self, store: &mut ConsentStore) {
        store.add_member(self.member.clone());
        store.add_checklist(self.checklist.clone());
    }

    /// A store holding the member and checklist
    #[must_use]
    pub fn store(&self) -> ConsentStore {
        let mut store = ConsentStore::new();
        self.add_to(&mut store);
        store
    }
}
