//! Subject identifier allocation
//!
//! Identifiers look like `066-40990001-3`: protocol number, then study site,
//! device id and a four digit sequence, then a check digit equal to the
//! numeric middle segment modulo 7.

use crate::config::ConsentConfig;
use crate::error::{ConsentError, Result};

/// Highest sequence number a device can issue
pub const MAX_SEQUENCE: u32 = 9999;

const CHECK_MODULUS: u64 = 7;

/// Check digit for the numeric middle segment of an identifier
pub fn check_digit(body: &str) -> Result<u64> {
    let value: u64 = body
        .parse()
        .map_err(|_| ConsentError::Identifier(format!("identifier body '{body}' is not numeric")))?;
    Ok(value % CHECK_MODULUS)
}

/// Whether an identifier is well formed and its check digit matches
#[must_use]
pub fn is_valid_identifier(identifier: &str) -> bool {
    let mut parts = identifier.split('-');
    let (Some(protocol), Some(body), Some(check), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if protocol.is_empty() || !protocol.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match (check_digit(body), check.parse::<u64>()) {
        (Ok(expected), Ok(actual)) => expected == actual,
        _ => false,
    }
}

/// Allocates new subject identifiers for one protocol, site and device
#[derive(Debug, Clone)]
pub struct SubjectIdentifierAllocator {
    prefix: String,
    protocol_number: String,
    next_sequence: u32,
}

impl SubjectIdentifierAllocator {
    /// Create an allocator that continues after the identifiers already
    /// issued with the same prefix
    pub fn new(config: &ConsentConfig, existing: &[String]) -> Result<Self> {
        config.validate()?;
        let prefix = format!("{}{}", config.study_site, config.device_id);
        let protocol_number = config.protocol_number.clone();
        let lead = format!("{protocol_number}-{prefix}");

        let last = existing
            .iter()
            .filter_map(|identifier| {
                let rest = identifier.strip_prefix(&lead)?;
                let (sequence, _) = rest.split_once('-')?;
                sequence.parse::<u32>().ok()
            })
            .max()
            .unwrap_or(0);

        Ok(Self {
            prefix,
            protocol_number,
            next_sequence: last + 1,
        })
    }

    /// Allocate the next identifier
    pub fn allocate(&mut self) -> Result<String> {
        if self.next_sequence > MAX_SEQUENCE {
            return Err(ConsentError::Identifier(format!(
                "sequence exhausted for site/device {}",
                self.prefix
            )));
        }
        let body = format!("{}{:04}", self.prefix, self.next_sequence);
        let check = check_digit(&body)?;
        self.next_sequence += 1;
        let identifier = format!("{}-{body}-{check}", self.protocol_number);
        log::info!("Allocated subject identifier {identifier}");
        Ok(identifier)
    }
}
