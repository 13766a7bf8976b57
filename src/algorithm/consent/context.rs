//! Sibling records a consent is validated against.
//!
//! The validator never looks records up by itself. Callers either build a
//! [`ConsentContext`] directly or resolve one through a [`ConsentLookup`].

use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ConsentError, Result};
use crate::models::traits::EntityModel;
use crate::models::{EnrollmentChecklist, HicEnrollment, HouseholdMember, SubjectConsent};

/// Query access to the records related to a consent
pub trait ConsentLookup {
    /// Household member by id
    fn household_member(&self, id: &Uuid) -> Option<Arc<HouseholdMember>>;

    /// Checklists of a member whose screening outcome was eligible
    fn eligible_checklists(&self, household_member: &Uuid) -> Vec<Arc<EnrollmentChecklist>>;

    /// HIC enrollments captured at visits of a member
    fn hic_enrollments(&self, household_member: &Uuid) -> Vec<Arc<HicEnrollment>>;
}

/// Related records for one consent
#[derive(Debug, Clone)]
pub struct ConsentContext {
    /// The consenting household member
    pub member: Arc<HouseholdMember>,
    /// The member's eligible checklist, if completed
    pub checklist: Option<Arc<EnrollmentChecklist>>,
    /// The member's HIC enrollment, if any
    pub hic_enrollment: Option<Arc<HicEnrollment>>,
}

impl ConsentContext {
    /// Build a context from records already at hand
    #[must_use]
    pub fn new(
        member: HouseholdMember,
        checklist: Option<EnrollmentChecklist>,
        hic_enrollment: Option<HicEnrollment>,
    ) -> Self {
        Self {
            member: Arc::new(member),
            checklist: checklist.map(Arc::new),
            hic_enrollment: hic_enrollment.map(Arc::new),
        }
    }

    /// Look up the records related to a consent.
    ///
    /// A missing member is an error. At most one eligible checklist and one
    /// HIC enrollment may exist for the member.
    pub fn resolve<L: ConsentLookup + ?Sized>(
        lookup: &L,
        consent: &SubjectConsent,
    ) -> Result<Self> {
        let member_id = consent.household_member;
        let member = lookup
            .household_member(&member_id)
            .ok_or_else(|| ConsentError::NotFound {
                model: HouseholdMember::VERBOSE_NAME,
                key: member_id.to_string(),
            })?;
        let checklist = at_most_one::<EnrollmentChecklist>(
            lookup.eligible_checklists(&member_id),
            &member_id,
        )?;
        let hic_enrollment =
            at_most_one::<HicEnrollment>(lookup.hic_enrollments(&member_id), &member_id)?;

        Ok(Self {
            member,
            checklist,
            hic_enrollment,
        })
    }
}

fn at_most_one<T: EntityModel>(
    mut records: Vec<Arc<T>>,
    member_id: &Uuid,
) -> Result<Option<Arc<T>>> {
    if records.len() > 1 {
        return Err(ConsentError::MultipleRecords {
            model: T::VERBOSE_NAME,
            key: format!("household member {member_id}"),
        });
    }
    Ok(records.pop())
}
