//! Consent cross-validation
//!
//! Checks a consent against its household member, the member's eligible
//! enrollment checklist and an optional HIC enrollment. Rules run in a fixed
//! order and the first failing rule rejects the record; later rules are not
//! evaluated.

use crate::algorithm::consent::context::ConsentContext;
use crate::algorithm::consent::minor::is_minor;
use crate::config::ValidatorConfig;
use crate::error::{ConsentValidationError, ValidationReason};
use crate::models::traits::EntityModel;
use crate::models::types::YesNo;
use crate::models::{EnrollmentChecklist, HicEnrollment, SubjectConsent};

type RuleResult = std::result::Result<(), ConsentValidationError>;

/// Cross-validator for subject consents
#[derive(Debug, Clone, Default)]
pub struct ConsentValidator {
    config: ValidatorConfig,
}

impl ConsentValidator {
    /// Create a validator with the given settings
    #[must_use]
    pub const fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validator settings
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a consent against its related records.
    ///
    /// Pure: the consent and context are only read, so repeated calls on the
    /// same inputs give the same answer.
    pub fn validate(&self, consent: &SubjectConsent, context: &ConsentContext) -> RuleResult {
        let result = self.run_rules(consent, context);
        match &result {
            Ok(()) => log::debug!("Consent {consent} passed cross-validation"),
            Err(e) => log::debug!("Consent {consent} rejected ({}): {}", e.reason, e.message),
        }
        result
    }

    fn run_rules(&self, consent: &SubjectConsent, context: &ConsentContext) -> RuleResult {
        check_member_eligible(context)?;
        self.check_hic_dob(consent, context.hic_enrollment.as_deref())?;
        let checklist = context.checklist.as_deref().ok_or_else(|| {
            ConsentValidationError::new(
                ValidationReason::MissingChecklist,
                format!(
                    "Member has not completed the '{}'. Please correct before continuing",
                    EnrollmentChecklist::VERBOSE_NAME
                ),
            )
        })?;
        check_dob(consent, checklist)?;
        check_gender(consent, checklist)?;
        check_guardian(consent, checklist)?;
        if !context.member.personal_details_changed.is_yes() {
            check_initials(consent, checklist)?;
        }
        check_citizenship(consent, checklist)?;
        check_literacy(consent, checklist)?;
        check_marriage(consent, checklist)
    }

    fn check_hic_dob(&self, consent: &SubjectConsent, hic: Option<&HicEnrollment>) -> RuleResult {
        let Some(hic) = hic else {
            return Ok(());
        };
        if !self.config.compare_hic_dob {
            return Ok(());
        }
        match hic.dob {
            Some(dob) if dob != consent.personal.dob => Err(ConsentValidationError::new(
                ValidationReason::DobConflict,
                format!(
                    "Date of birth does not match with that on '{}'. Please correct.",
                    HicEnrollment::VERBOSE_NAME
                ),
            )),
            _ => Ok(()),
        }
    }
}

fn check_member_eligible(context: &ConsentContext) -> RuleResult {
    if context.member.eligible_subject {
        Ok(())
    } else {
        Err(ConsentValidationError::new(
            ValidationReason::IneligibleMember,
            "Member is not eligible for consent",
        ))
    }
}

fn check_dob(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    if checklist.dob == consent.personal.dob {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::DobMismatch,
        format!(
            "DoB mismatch. DoB does not match with that on '{}'",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn check_gender(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    if checklist.gender == consent.personal.gender {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::GenderMismatch,
        format!(
            "Gender mismatch. Gender does not match '{}'",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn check_guardian(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    if !is_minor(consent.personal.dob, consent.consent_datetime) {
        return Ok(());
    }
    if checklist.guardian.is_yes() && is_present(consent.personal.guardian_name.as_deref()) {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::GuardianRequired,
        format!(
            "{} indicates that subject is a minor with guardian available, \
             but the consent does not indicate this.",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn check_initials(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    if checklist.initials == consent.personal.initials {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::InitialsMismatch,
        format!(
            "Initials mismatch. Initials do not match '{}'",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn check_citizenship(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    if checklist.citizen == consent.citizenship.citizen {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::CitizenshipMismatch,
        format!(
            "Citizenship mismatch. Citizenship does not match '{}'",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn check_literacy(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    if !checklist.literacy.is_yes() {
        return Ok(());
    }
    let literate = consent.vulnerability.is_literate;
    let witnessed =
        literate == YesNo::No && is_present(consent.vulnerability.witness_name.as_deref());
    if literate.is_yes() || witnessed {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::LiteracyMismatch,
        format!(
            "Literacy mismatch. Answer to whether this subject is literate/not literate \
             but with a literate witness, does not match '{}'",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn check_marriage(consent: &SubjectConsent, checklist: &EnrollmentChecklist) -> RuleResult {
    let answers = &consent.citizenship;
    if answers.citizen != YesNo::No {
        return Ok(());
    }
    if checklist.legal_marriage == answers.legal_marriage
        && checklist.marriage_certificate == answers.marriage_certificate
    {
        return Ok(());
    }
    Err(ConsentValidationError::new(
        ValidationReason::MarriageCitizenshipMismatch,
        format!(
            "Citizenship by marriage mismatch. Answer indicates that this subject is married \
             to a citizen with a valid marriage certificate. This does not match '{}'",
            EnrollmentChecklist::VERBOSE_NAME
        ),
    ))
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subject_consent::{
        CitizenFields, IdentityFields, PersonalFields, VulnerabilityFields,
    };
    use crate::models::types::{Gender, IdentityType, YesNoNa};
    use crate::models::HouseholdMember;
    use chrono::{NaiveDate, TimeZone, Utc};
    use uuid::Uuid;

    fn fixture(dob: NaiveDate) -> (SubjectConsent, ConsentContext) {
        let member = HouseholdMember::new("ONE", "OT", Gender::Female, 30);
        let consent = SubjectConsent::new(
            member.id,
            "bcpp-year-1",
            "40",
            "1",
            Utc.with_ymd_and_hms(2016, 10, 17, 8, 30, 0).unwrap(),
            IdentityFields {
                identity: "317928515".to_string(),
                identity_type: IdentityType::Omang,
                confirm_identity: "317928515".to_string(),
            },
            PersonalFields {
                first_name: "ONE".to_string(),
                last_name: "THING".to_string(),
                initials: "OT".to_string(),
                dob,
                is_dob_estimated: YesNo::No,
                gender: Gender::Female,
                guardian_name: None,
            },
            VulnerabilityFields {
                language: "English".to_string(),
                is_literate: YesNo::Yes,
                witness_name: None,
            },
            CitizenFields::citizen(),
        );
        let checklist = EnrollmentChecklist {
            id: Uuid::new_v4(),
            household_member: member.id,
            report_datetime: consent.consent_datetime,
            dob,
            gender: Gender::Female,
            initials: "OT".to_string(),
            citizen: YesNo::Yes,
            literacy: YesNo::No,
            guardian: YesNoNa::NotApplicable,
            legal_marriage: YesNoNa::NotApplicable,
            marriage_certificate: YesNoNa::NotApplicable,
            is_eligible: true,
        };
        (consent, ConsentContext::new(member, Some(checklist), None))
    }

    fn hic(member: &HouseholdMember, dob: Option<NaiveDate>) -> HicEnrollment {
        HicEnrollment {
            id: Uuid::new_v4(),
            household_member: member.id,
            subject_visit: None,
            report_datetime: Utc.with_ymd_and_hms(2016, 10, 18, 8, 0, 0).unwrap(),
            hic_permission: YesNo::Yes,
            dob,
        }
    }

    #[test]
    fn test_hic_dob_conflict() {
        let (consent, mut context) = fixture(NaiveDate::from_ymd_opt(1986, 10, 17).unwrap());
        let other = NaiveDate::from_ymd_opt(1986, 10, 18).unwrap();
        context.hic_enrollment = Some(hic(&context.member, Some(other)).into());

        let err = ConsentValidator::default()
            .validate(&consent, &context)
            .unwrap_err();
        assert_eq!(err.reason, ValidationReason::DobConflict);
        assert!(err.message.contains("HIC Enrollment"));
    }

    #[test]
    fn test_hic_without_dob_passes() {
        let (consent, mut context) = fixture(NaiveDate::from_ymd_opt(1986, 10, 17).unwrap());
        context.hic_enrollment = Some(hic(&context.member, None).into());
        assert!(ConsentValidator::default().validate(&consent, &context).is_ok());
    }

    #[test]
    fn test_hic_comparison_can_be_disabled() {
        let (consent, mut context) = fixture(NaiveDate::from_ymd_opt(1986, 10, 17).unwrap());
        let other = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        context.hic_enrollment = Some(hic(&context.member, Some(other)).into());

        let validator = ConsentValidator::new(ValidatorConfig {
            compare_hic_dob: false,
        });
        assert!(validator.validate(&consent, &context).is_ok());
    }

    #[test]
    fn test_blank_guardian_name_is_missing() {
        let (mut consent, mut context) = fixture(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        consent.personal.guardian_name = Some("   ".to_string());
        let mut checklist = (*context.checklist.take().unwrap()).clone();
        checklist.guardian = YesNoNa::Yes;
        context.checklist = Some(checklist.into());

        let err = ConsentValidator::default()
            .validate(&consent, &context)
            .unwrap_err();
        assert_eq!(err.reason, ValidationReason::GuardianRequired);
    }

    #[test]
    fn test_changed_personal_details_skip_initials() {
        let (mut consent, context) = fixture(NaiveDate::from_ymd_opt(1986, 10, 17).unwrap());
        consent.personal.initials = "OX".to_string();
        let err = ConsentValidator::default()
            .validate(&consent, &context)
            .unwrap_err();
        assert_eq!(err.reason, ValidationReason::InitialsMismatch);

        let mut member = (*context.member).clone();
        member.personal_details_changed = YesNo::Yes;
        let context = ConsentContext {
            member: member.into(),
            ..context
        };
        assert!(ConsentValidator::default().validate(&consent, &context).is_ok());
    }
}
