//! Tests for the circumcision case report forms

use bcpp_consent::forms::circumcision::{CircumcisedForm, CircumcisionBenefit, UncircumcisedForm};
use bcpp_consent::forms::CaseReportForm;
use bcpp_consent::models::types::{AgeUnit, YesNo};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn circumcised_form() -> CircumcisedForm {
    let report_datetime = Utc.with_ymd_and_hms(2016, 10, 20, 10, 0, 0).unwrap();
    CircumcisedForm {
        subject_visit: Some(Uuid::new_v4()),
        report_datetime: Some(report_datetime),
        circumcised: Some(YesNo::Yes),
        circ_date: Some(report_datetime.date_naive()),
        when_circ: Some(18),
        age_unit_circ: Some(AgeUnit::Years),
        where_circ: Some("Government clinic or hospital".to_string()),
        why_circ: Some("Improved hygiene".to_string()),
        health_benefits_smc: Some(vec![CircumcisionBenefit::ImprovedHygiene]),
    }
}

fn uncircumcised_form() -> UncircumcisedForm {
    UncircumcisedForm {
        subject_visit: Some(Uuid::new_v4()),
        report_datetime: Some(Utc.with_ymd_and_hms(2016, 10, 20, 10, 0, 0).unwrap()),
        circumcised: Some(YesNo::Yes),
        reason_circ: Some("Circumcision never offered to me".to_string()),
        future_circ: Some(YesNo::Yes),
        future_reasons_smc: Some("More information about benefits".to_string()),
        service_facilities: Some(YesNo::Yes),
        aware_free: Some("Radio".to_string()),
        health_benefits_smc: Some(vec![CircumcisionBenefit::ReducedHivRisk]),
    }
}

#[test]
fn test_circumcision_form_valid() {
    assert!(circumcised_form().is_valid());
}

#[test]
fn test_circumcision_health_benefits_smc_none() {
    let form = CircumcisedForm {
        health_benefits_smc: None,
        ..circumcised_form()
    };
    assert!(!form.is_valid());
    let errors = form.clean().unwrap_err();
    assert_eq!(errors.field("health_benefits_smc"), ["This field is required."]);
}

#[test]
fn test_circumcision_date_after_report() {
    let mut form = circumcised_form();
    form.circ_date = form
        .report_datetime
        .map(|dt| dt.date_naive() + chrono::Duration::days(1));
    let errors = form.clean().unwrap_err();
    assert_eq!(errors.field("circ_date").len(), 1);
}

#[test]
fn test_circumcision_form_collects_all_errors() {
    let errors = CircumcisedForm::default().clean().unwrap_err();
    for field in [
        "subject_visit",
        "report_datetime",
        "circumcised",
        "when_circ",
        "age_unit_circ",
        "where_circ",
        "why_circ",
        "health_benefits_smc",
    ] {
        assert_eq!(errors.field(field).len(), 1, "{field}");
    }
}

#[test]
fn test_uncircumcision_form_valid() {
    assert!(uncircumcised_form().is_valid());
}

#[test]
fn test_uncircumcision_health_benefits_smc_none() {
    let form = UncircumcisedForm {
        health_benefits_smc: None,
        ..uncircumcised_form()
    };
    assert!(!form.is_valid());
}

#[test]
fn test_uncircumcision_empty_benefits() {
    let form = UncircumcisedForm {
        health_benefits_smc: Some(Vec::new()),
        ..uncircumcised_form()
    };
    assert!(!form.is_valid());
}

#[test]
fn test_uncircumcision_future_reasons_required() {
    let mut form = uncircumcised_form();
    form.future_reasons_smc = None;
    let errors = form.clean().unwrap_err();
    assert_eq!(errors.field("future_reasons_smc").len(), 1);

    form.future_circ = Some(YesNo::No);
    assert!(form.is_valid());
}

#[test]
fn test_not_aware_is_exclusive() {
    let form = UncircumcisedForm {
        health_benefits_smc: Some(vec![
            CircumcisionBenefit::NotAware,
            CircumcisionBenefit::ImprovedHygiene,
        ]),
        ..uncircumcised_form()
    };
    assert!(!form.is_valid());
}

#[test]
fn test_form_from_json() {
    let form: CircumcisedForm = serde_json::from_str(
        r#"{
            "subject_visit": "6f1c2d1e-4a9b-4a57-9b1a-3f3a9f0b2c11",
            "report_datetime": "2016-10-20T10:00:00Z",
            "circumcised": "Yes",
            "when_circ": 18,
            "age_unit_circ": "Years",
            "where_circ": "Government clinic or hospital",
            "why_circ": "Improved hygiene",
            "health_benefits_smc": ["Improved hygiene", "Reduced risk of HIV"]
        }"#,
    )
    .unwrap();
    assert!(form.is_valid());
}
