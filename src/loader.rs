//! Dataset loading utilities
//!
//! A dataset is one JSON document holding the household, screening and
//! saved consent records, plus the candidate consents to check.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

use crate::collections::ConsentStore;
use crate::collections::store::StoreSnapshot;
use crate::error::Result;
use crate::error::util::safe_read_to_string;
use crate::models::SubjectConsent;
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};

/// Serialized form of a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatasetFile {
    /// Records already on file
    #[serde(flatten)]
    pub records: StoreSnapshot,
    /// Consents submitted for validation
    #[serde(default)]
    pub candidate_consents: Vec<SubjectConsent>,
}

/// A loaded dataset
#[derive(Debug)]
pub struct Dataset {
    /// Records already on file
    pub store: ConsentStore,
    /// Consents submitted for validation
    pub candidates: Vec<SubjectConsent>,
}

/// Parse a dataset from JSON text
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let file: DatasetFile = serde_json::from_str(text)?;
    let mut candidates = file.candidate_consents;
    // Derived flags are never taken from input
    candidates.iter_mut().for_each(SubjectConsent::refresh_derived);
    Ok(Dataset {
        store: ConsentStore::from_snapshot(file.records),
        candidates,
    })
}

/// Read a dataset file
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    log_operation_start("Loading consent dataset from", path);
    let start = Instant::now();

    let text = safe_read_to_string(path, "loading consent dataset")?;
    let dataset = parse_dataset(&text)?;

    if dataset.candidates.is_empty() {
        log_warning("Dataset has no candidate consents", Some(path));
    }
    log_operation_complete(
        "Loaded",
        path,
        dataset.store.consent_count() + dataset.candidates.len(),
        Some(start.elapsed()),
    );
    Ok(dataset)
}
