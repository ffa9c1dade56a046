//! Constants used throughout the Vida+ core crate.

/// Clinic name shown in the menu banner when no name is configured.
pub const DEFAULT_CLINIC_NAME: &str = "CLÍNICA VIDA+";

/// Environment variable that overrides the clinic name.
pub const CLINIC_NAME_ENV: &str = "VIDA_CLINIC_NAME";

/// Number of decimal places used when presenting the mean age.
pub const MEAN_AGE_DECIMALS: usize = 2;
