//! Circumcision case report forms
//!
//! Men who report being circumcised complete [`CircumcisedForm`]; the others
//! complete [`UncircumcisedForm`]. Both ask which health benefits of male
//! circumcision the subject is aware of, and at least one answer is required.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::forms::{CaseReportForm, FormErrors};
use crate::models::types::{AgeUnit, YesNo};

/// Health benefits of male circumcision a subject may be aware of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CircumcisionBenefit {
    /// Improved hygiene
    #[serde(rename = "Improved hygiene")]
    ImprovedHygiene,
    /// Reduced risk of HIV
    #[serde(rename = "Reduced risk of HIV")]
    ReducedHivRisk,
    /// Reduced risk of other sexually transmitted diseases
    #[serde(rename = "Reduced risk of other sexually transmitted diseases")]
    ReducedStiRisk,
    /// Reduced risk of cancer
    #[serde(rename = "Reduced risk of cancer")]
    ReducedCancerRisk,
    /// Some other benefit
    #[serde(rename = "Other")]
    Other,
    /// Not aware of any benefit
    #[serde(rename = "I am not aware of any benefits")]
    NotAware,
}

/// Form for subjects who report being circumcised
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircumcisedForm {
    /// Visit the form is captured at
    pub subject_visit: Option<Uuid>,
    /// When the form was completed
    pub report_datetime: Option<DateTime<Utc>>,
    /// Whether the subject is circumcised
    pub circumcised: Option<YesNo>,
    /// Date of circumcision, if known
    pub circ_date: Option<NaiveDate>,
    /// Age at circumcision
    pub when_circ: Option<u32>,
    /// Unit of `when_circ`
    pub age_unit_circ: Option<AgeUnit>,
    /// Where the circumcision was done
    pub where_circ: Option<String>,
    /// Main reason for circumcision
    pub why_circ: Option<String>,
    /// Known health benefits of circumcision
    pub health_benefits_smc: Option<Vec<CircumcisionBenefit>>,
}

impl CaseReportForm for CircumcisedForm {
    fn clean(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("subject_visit", self.subject_visit.as_ref());
        errors.require("report_datetime", self.report_datetime.as_ref());
        errors.require("circumcised", self.circumcised.as_ref());
        errors.require("when_circ", self.when_circ.as_ref());
        errors.require("age_unit_circ", self.age_unit_circ.as_ref());
        errors.require_text("where_circ", self.where_circ.as_deref());
        errors.require_text("why_circ", self.why_circ.as_deref());
        check_benefits(&mut errors, self.health_benefits_smc.as_deref());

        if let (Some(circ_date), Some(report_datetime)) = (self.circ_date, self.report_datetime) {
            if circ_date > report_datetime.date_naive() {
                errors.add("circ_date", "Date of circumcision cannot be after the report date.");
            }
        }
        if self.when_circ == Some(0) {
            errors.add("when_circ", "Age at circumcision must be greater than zero.");
        }

        errors.into_result()
    }
}

/// Form for subjects who report not being circumcised
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncircumcisedForm {
    /// Visit the form is captured at
    pub subject_visit: Option<Uuid>,
    /// When the form was completed
    pub report_datetime: Option<DateTime<Utc>>,
    /// Whether the subject is circumcised
    pub circumcised: Option<YesNo>,
    /// Main reason for not being circumcised
    pub reason_circ: Option<String>,
    /// Whether the subject would consider circumcision in future
    pub future_circ: Option<YesNo>,
    /// What would make the subject more likely to be circumcised
    pub future_reasons_smc: Option<String>,
    /// Whether the subject knows where circumcision services are offered
    pub service_facilities: Option<YesNo>,
    /// How the subject learned that circumcision is free
    pub aware_free: Option<String>,
    /// Known health benefits of circumcision
    pub health_benefits_smc: Option<Vec<CircumcisionBenefit>>,
}

impl CaseReportForm for UncircumcisedForm {
    fn clean(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("subject_visit", self.subject_visit.as_ref());
        errors.require("report_datetime", self.report_datetime.as_ref());
        errors.require("circumcised", self.circumcised.as_ref());
        errors.require_text("reason_circ", self.reason_circ.as_deref());
        errors.require("future_circ", self.future_circ.as_ref());
        errors.require("service_facilities", self.service_facilities.as_ref());
        if self.future_circ == Some(YesNo::Yes) {
            errors.require_text("future_reasons_smc", self.future_reasons_smc.as_deref());
        }
        check_benefits(&mut errors, self.health_benefits_smc.as_deref());
        errors.into_result()
    }
}

fn check_benefits(errors: &mut FormErrors, benefits: Option<&[CircumcisionBenefit]>) {
    match benefits {
        None | Some([]) => errors.add("health_benefits_smc", "This field is required."),
        Some(selected) => {
            if selected.len() > 1 && selected.contains(&CircumcisionBenefit::NotAware) {
                errors.add(
                    "health_benefits_smc",
                    "'I am not aware of any benefits' cannot be combined with other answers.",
                );
            }
        }
    }
}
