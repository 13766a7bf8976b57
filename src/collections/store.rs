//! In-memory record store
//!
//! Holds the household, screening and consent records of one dataset and
//! answers the lookups the consent validator needs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::consent::context::ConsentLookup;
use crate::collections::GenericCollection;
use crate::common::traits::ModelCollection;
use crate::models::{
    EnrollmentChecklist, HicEnrollment, HouseholdMember, RegisteredSubject, SubjectConsent,
};

/// Plain record lists, the serialized form of a [`ConsentStore`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    /// Household members
    pub household_members: Vec<HouseholdMember>,
    /// Enrollment checklists
    pub enrollment_checklists: Vec<EnrollmentChecklist>,
    /// HIC enrollments
    pub hic_enrollments: Vec<HicEnrollment>,
    /// Saved consents
    pub subject_consents: Vec<SubjectConsent>,
    /// Registered subjects
    pub registered_subjects: Vec<RegisteredSubject>,
}

/// In-memory store of all records related to consent
#[derive(Debug, Default)]
pub struct ConsentStore {
    members: GenericCollection<HouseholdMember>,
    checklists: GenericCollection<EnrollmentChecklist>,
    hic_enrollments: GenericCollection<HicEnrollment>,
    consents: GenericCollection<SubjectConsent>,
    registered_subjects: GenericCollection<RegisteredSubject>,
}

impl ConsentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a snapshot.
    ///
    /// Derived consent flags are not read from the snapshot; they are
    /// recomputed as the consents are loaded.
    #[must_use]
    pub fn from_snapshot(mut snapshot: StoreSnapshot) -> Self {
        snapshot
            .subject_consents
            .iter_mut()
            .for_each(SubjectConsent::refresh_derived);
        Self {
            members: GenericCollection::from_models(snapshot.household_members),
            checklists: GenericCollection::from_models(snapshot.enrollment_checklists),
            hic_enrollments: GenericCollection::from_models(snapshot.hic_enrollments),
            consents: GenericCollection::from_models(snapshot.subject_consents),
            registered_subjects: GenericCollection::from_models(snapshot.registered_subjects),
        }
    }

    /// Copy all records out into a snapshot
    #[must_use]
    pub fn snapshot(&self) -> StoreSnapshot {
        fn owned<T: Clone>(items: Vec<Arc<T>>) -> Vec<T> {
            items.iter().map(|item| (**item).clone()).collect()
        }
        let mut consents = owned(self.consents.all());
        consents.sort_by_key(|c| (c.consent_datetime, c.id));
        StoreSnapshot {
            household_members: owned(self.members.all()),
            enrollment_checklists: owned(self.checklists.all()),
            hic_enrollments: owned(self.hic_enrollments.all()),
            subject_consents: consents,
            registered_subjects: owned(self.registered_subjects.all()),
        }
    }

    /// Add or replace a household member
    pub fn add_member(&mut self, member: HouseholdMember) {
        self.members.add(member);
    }

    /// Add or replace an enrollment checklist
    pub fn add_checklist(&mut self, checklist: EnrollmentChecklist) {
        self.checklists.add(checklist);
    }

    /// Add or replace a HIC enrollment
    pub fn add_hic_enrollment(&mut self, enrollment: HicEnrollment) {
        self.hic_enrollments.add(enrollment);
    }

    /// Add or replace a consent, without validation
    pub(crate) fn put_consent(&mut self, consent: SubjectConsent) {
        self.consents.add(consent);
    }

    /// Add or replace a registered subject
    pub fn put_registered_subject(&mut self, subject: RegisteredSubject) {
        self.registered_subjects.add(subject);
    }

    /// Consent by record id
    #[must_use]
    pub fn consent(&self, id: &Uuid) -> Option<Arc<SubjectConsent>> {
        self.consents.get(id)
    }

    /// Saved consents matching a predicate
    pub fn consents_where<F>(&self, predicate: F) -> Vec<Arc<SubjectConsent>>
    where
        F: Fn(&SubjectConsent) -> bool,
    {
        self.consents.filter(predicate)
    }

    /// All consents of a subject, newest first
    #[must_use]
    pub fn consents_for_subject(&self, subject_identifier: &str) -> Vec<Arc<SubjectConsent>> {
        let mut consents = self
            .consents
            .filter(|c| c.subject_identifier.as_deref() == Some(subject_identifier));
        consents.sort_by(|a, b| newest_first(a.consent_datetime, b.consent_datetime));
        consents
    }

    /// Number of saved consents
    #[must_use]
    pub fn consent_count(&self) -> usize {
        self.consents.count()
    }

    /// Registered subject by identity document number
    #[must_use]
    pub fn registered_subject_by_identity(&self, identity: &str) -> Option<Arc<RegisteredSubject>> {
        self.registered_subjects.find(|s| s.identity == identity)
    }

    /// Registered subject by subject identifier
    #[must_use]
    pub fn registered_subject(&self, subject_identifier: &str) -> Option<Arc<RegisteredSubject>> {
        self.registered_subjects
            .find(|s| s.subject_identifier == subject_identifier)
    }

    /// All subject identifiers issued so far
    #[must_use]
    pub fn subject_identifiers(&self) -> Vec<String> {
        let mut identifiers: Vec<String> = self
            .registered_subjects
            .all()
            .iter()
            .map(|s| s.subject_identifier.clone())
            .chain(
                self.consents
                    .all()
                    .iter()
                    .filter_map(|c| c.subject_identifier.clone()),
            )
            .collect();
        identifiers.sort();
        identifiers.dedup();
        identifiers
    }
}

fn newest_first(a: DateTime<Utc>, b: DateTime<Utc>) -> std::cmp::Ordering {
    b.cmp(&a)
}

impl ConsentLookup for ConsentStore {
    fn household_member(&self, id: &Uuid) -> Option<Arc<HouseholdMember>> {
        self.members.get(id)
    }

    fn eligible_checklists(&self, household_member: &Uuid) -> Vec<Arc<EnrollmentChecklist>> {
        self.checklists
            .filter(|c| c.household_member == *household_member && c.is_eligible)
    }

    fn hic_enrollments(&self, household_member: &Uuid) -> Vec<Arc<HicEnrollment>> {
        self.hic_enrollments
            .filter(|h| h.household_member == *household_member)
    }
}
