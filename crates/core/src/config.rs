//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the console.
//! Nothing below reads the environment itself; callers hand in the raw values.

use crate::constants::DEFAULT_CLINIC_NAME;
use crate::{RegistryError, RegistryResult};
use vida_types::NonEmptyText;

/// Longest clinic name that still fits the menu banner.
const MAX_CLINIC_NAME_CHARS: usize = 60;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ClinicConfig {
    clinic_name: String,
}

impl ClinicConfig {
    /// Create a new `ClinicConfig`.
    pub fn new(clinic_name: NonEmptyText) -> RegistryResult<Self> {
        if clinic_name.as_str().chars().count() > MAX_CLINIC_NAME_CHARS {
            return Err(RegistryError::InvalidInput(format!(
                "clinic name exceeds maximum length of {} characters",
                MAX_CLINIC_NAME_CHARS
            )));
        }

        Ok(Self {
            clinic_name: clinic_name.as_str().to_owned(),
        })
    }

    pub fn clinic_name(&self) -> &str {
        &self.clinic_name
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_name: DEFAULT_CLINIC_NAME.to_owned(),
        }
    }
}

/// Parse the clinic name from an optional string value.
///
/// Returns `None` if `value` is `None` or empty/whitespace.
pub fn clinic_name_from_env_value(value: Option<String>) -> Option<NonEmptyText> {
    value.and_then(|v| NonEmptyText::new(v).ok())
}

/// Build the startup configuration from an optional raw clinic name.
///
/// Falls back to [`ClinicConfig::default`] when no usable name is given.
pub fn resolve_config(clinic_name: Option<String>) -> RegistryResult<ClinicConfig> {
    match clinic_name_from_env_value(clinic_name) {
        Some(name) => ClinicConfig::new(name),
        None => Ok(ClinicConfig::default()),
    }
}
