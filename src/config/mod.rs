//! Configuration for consent validation and enrollment.
//!
//! Settings are plain serde structs with defaults matching the field
//! deployment; a TOML file may override any subset of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::util::safe_read_to_string;
use crate::error::{ConsentError, Result};

/// Configuration for the consent cross-validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Compare the HIC enrollment date of birth with the consent.
    ///
    /// When disabled the HIC rule only checks that the lookup succeeds and
    /// can never reject a record.
    pub compare_hic_dob: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            compare_hic_dob: true,
        }
    }
}

/// Configuration for the consent workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentConfig {
    /// Protocol number, first segment of subject identifiers
    pub protocol_number: String,
    /// Two digit study site code
    pub study_site: String,
    /// Two digit code of the capturing device
    pub device_id: String,
    /// Community (map area) the device is deployed to
    pub map_area: String,
    /// Cross-validator settings
    pub validator: ValidatorConfig,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            protocol_number: "066".to_string(),
            study_site: "40".to_string(),
            device_id: "99".to_string(),
            map_area: "test_community".to_string(),
            validator: ValidatorConfig::default(),
        }
    }
}

impl ConsentConfig {
    /// Parse settings from TOML text and check them
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = safe_read_to_string(path, "loading consent settings")?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded consent settings from {}", path.display());
        Ok(config)
    }

    /// Check that identifier segments are numeric and of the right width
    pub fn validate(&self) -> Result<()> {
        check_digits("protocol_number", &self.protocol_number, 3)?;
        check_digits("study_site", &self.study_site, 2)?;
        check_digits("device_id", &self.device_id, 2)?;
        if self.map_area.trim().is_empty() {
            return Err(ConsentError::Config("map_area must not be empty".to_string()));
        }
        Ok(())
    }
}

fn check_digits(name: &str, value: &str, width: usize) -> Result<()> {
    if value.len() != width || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConsentError::Config(format!(
            "{name} must be {width} digits, got '{value}'"
        )));
    }
    Ok(())
}

impl fmt::Display for ConsentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Consent Configuration:")?;
        writeln!(f, "  Protocol Number: {}", self.protocol_number)?;
        writeln!(f, "  Study Site: {}", self.study_site)?;
        writeln!(f, "  Device ID: {}", self.device_id)?;
        writeln!(f, "  Map Area: {}", self.map_area)?;
        writeln!(
            f,
            "  Compare HIC Date of Birth: {}",
            self.validator.compare_hic_dob
        )?;
        Ok(())
    }
}
