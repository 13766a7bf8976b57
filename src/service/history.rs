//! Audit trail of saved consents
//!
//! Every save appends a full copy of the record as it was persisted.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::SubjectConsent;

/// Kind of change recorded in the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// First save of the record
    Created,
    /// Later save of an existing record
    Changed,
}

/// One historical version of a consent
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    /// History row id
    pub history_id: Uuid,
    /// Id of the consent the row belongs to
    pub consent_id: Uuid,
    /// Kind of change
    pub change: ChangeType,
    /// When the change was saved
    pub history_datetime: DateTime<Utc>,
    /// The record as saved
    pub snapshot: SubjectConsent,
}

/// Append-only history of consent saves
#[derive(Debug, Clone, Default)]
pub struct ConsentHistory {
    entries: Vec<HistoryEntry>,
}

impl ConsentHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version of a consent
    pub fn record(&mut self, change: ChangeType, consent: &SubjectConsent, at: DateTime<Utc>) {
        self.entries.push(HistoryEntry {
            history_id: Uuid::new_v4(),
            consent_id: consent.id,
            change,
            history_datetime: at,
            snapshot: consent.clone(),
        });
    }

    /// Versions of one consent, oldest first
    #[must_use]
    pub fn for_consent(&self, consent_id: &Uuid) -> Vec<&HistoryEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.consent_id == *consent_id)
            .collect()
    }
}
