//! Consent service
//!
//! Owns the record store and runs the save workflow for consents:
//! cross-validation first, then identifier assignment, derived flags,
//! uniqueness checks, persistence, history and subject registration.
//! A consent that fails any step is not persisted.

pub mod history;

pub use history::{ChangeType, ConsentHistory, HistoryEntry};

use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::algorithm::consent::{
    ConsentContext, ConsentValidator, ValidationOutcome, validate_all,
};
use crate::collections::ConsentStore;
use crate::config::ConsentConfig;
use crate::error::{ConsentError, Result};
use crate::identifier::SubjectIdentifierAllocator;
use crate::models::traits::EntityModel;
use crate::models::{RegisteredSubject, SubjectConsent};

/// Validates and persists subject consents
#[derive(Debug)]
pub struct ConsentService {
    config: ConsentConfig,
    validator: ConsentValidator,
    store: ConsentStore,
    allocator: SubjectIdentifierAllocator,
    history: ConsentHistory,
}

impl ConsentService {
    /// Create a service over an existing store
    pub fn new(config: ConsentConfig, store: ConsentStore) -> Result<Self> {
        let allocator = SubjectIdentifierAllocator::new(&config, &store.subject_identifiers())?;
        Ok(Self {
            validator: ConsentValidator::new(config.validator.clone()),
            config,
            store,
            allocator,
            history: ConsentHistory::new(),
        })
    }

    /// Service settings
    #[must_use]
    pub const fn config(&self) -> &ConsentConfig {
        &self.config
    }

    /// The record store
    #[must_use]
    pub const fn store(&self) -> &ConsentStore {
        &self.store
    }

    /// Mutable access to the store, for adding household and screening records
    pub fn store_mut(&mut self) -> &mut ConsentStore {
        &mut self.store
    }

    /// Consume the service and return its store
    #[must_use]
    pub fn into_store(self) -> ConsentStore {
        self.store
    }

    /// Cross-validate a consent against the stored sibling records
    pub fn validate(&self, consent: &SubjectConsent) -> Result<()> {
        let context = ConsentContext::resolve(&self.store, consent)?;
        self.validator.validate(consent, &context)?;
        Ok(())
    }

    /// Review many consents in parallel without saving them
    #[must_use]
    pub fn review(&self, consents: &[SubjectConsent]) -> Vec<ValidationOutcome> {
        validate_all(&self.validator, &self.store, consents)
    }

    /// Validate and persist a consent
    pub fn save(&mut self, consent: SubjectConsent) -> Result<Arc<SubjectConsent>> {
        self.save_at(consent, Utc::now())
    }

    /// Validate and persist a consent, stamping history with `now`
    pub fn save_at(
        &mut self,
        mut consent: SubjectConsent,
        now: DateTime<Utc>,
    ) -> Result<Arc<SubjectConsent>> {
        if let Err(e) = self.validate(&consent) {
            log::warn!("Rejected consent {consent}: {e}");
            return Err(e);
        }

        let existing = self.store.consent(&consent.id);
        let change = if existing.is_some() {
            ChangeType::Changed
        } else {
            ChangeType::Created
        };

        // Identifiers come from the stored record, the registration or the
        // allocator, never from the submitted consent. Allocation is only
        // committed once the record is persisted.
        let mut allocator = self.allocator.clone();
        let stored = existing
            .as_ref()
            .and_then(|stored| stored.subject_identifier.clone());
        consent.subject_identifier = match stored {
            Some(identifier) => Some(identifier),
            None => Some(self.assign_identifier(&consent, &mut allocator)?),
        };

        consent.refresh_derived();
        self.check_unique(&consent)?;

        let identifier = consent
            .subject_identifier
            .clone()
            .ok_or_else(|| ConsentError::Identifier("no subject identifier assigned".to_string()))?;
        self.allocator = allocator;
        self.history.record(change, &consent, now);
        self.register(&identifier, &consent);
        let id = consent.id;
        self.store.put_consent(consent);
        log::info!("Saved consent {identifier} ({change:?})");

        self.store.consent(&id).ok_or_else(|| ConsentError::NotFound {
            model: SubjectConsent::VERBOSE_NAME,
            key: id.to_string(),
        })
    }

    /// Latest consent of a subject by consent timestamp
    #[must_use]
    pub fn latest_consent(&self, subject_identifier: &str) -> Option<Arc<SubjectConsent>> {
        self.store
            .consents_for_subject(subject_identifier)
            .into_iter()
            .next()
    }

    /// Saved versions of a consent, oldest first
    #[must_use]
    pub fn history(&self, consent_id: &Uuid) -> Vec<&HistoryEntry> {
        self.history.for_consent(consent_id)
    }

    fn assign_identifier(
        &self,
        consent: &SubjectConsent,
        allocator: &mut SubjectIdentifierAllocator,
    ) -> Result<String> {
        if let Some(registered) = self
            .store
            .registered_subject_by_identity(&consent.identity.identity)
        {
            log::info!(
                "Reusing subject identifier {} for identity on file",
                registered.subject_identifier
            );
            return Ok(registered.subject_identifier.clone());
        }
        allocator.allocate()
    }

    fn check_unique(&self, consent: &SubjectConsent) -> Result<()> {
        let others = self.store.consents_where(|other| other.id != consent.id);

        if let Some((identifier, version)) = consent.identifier_version_key() {
            if others
                .iter()
                .any(|other| other.identifier_version_key() == Some((identifier, version)))
            {
                return Err(ConsentError::Duplicate {
                    constraint: "subject_identifier, version",
                    key: format!("{identifier}, {version}"),
                });
            }
        }

        let personal = consent.personal_version_key();
        if others
            .iter()
            .any(|other| other.personal_version_key() == personal)
        {
            let (first_name, dob, initials, version) = personal;
            return Err(ConsentError::Duplicate {
                constraint: "first_name, dob, initials, version",
                key: format!("{first_name}, {dob}, {initials}, {version}"),
            });
        }
        Ok(())
    }

    fn register(&mut self, subject_identifier: &str, consent: &SubjectConsent) {
        let registered = match self.store.registered_subject(subject_identifier) {
            Some(existing) => {
                let mut updated = (*existing).clone();
                updated.update_from_consent(consent);
                updated
            }
            None => {
                log::info!("Registering subject {subject_identifier}");
                RegisteredSubject::from_consent(subject_identifier, consent)
            }
        };
        self.store.put_registered_subject(registered);
    }
}
