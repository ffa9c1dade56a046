//! In-memory patient registry.
//!
//! The registry is an append-only, insertion-ordered list of [`Patient`] records owned by
//! whoever constructs it. It lives for the duration of the process and is never persisted.
//!
//! All lookups are linear scans:
//!
//! - `find_by_name` returns the first exact, case-sensitive match
//! - `statistics` walks every record once
//!
//! Nothing here performs I/O; prompting and rendering belong to the console in `vida-cli`.

use crate::error::RegistryResult;
use crate::patient::Patient;
use crate::statistics::Statistics;
use vida_types::Age;

/// Ordered collection of patient records for the process lifetime.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    patients: Vec<Patient>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a patient from raw operator input.
    ///
    /// `age` is parsed before anything is stored, so a rejected age leaves the registry
    /// untouched and the caller can simply prompt again.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidAge` if `age` is not a non-negative whole number.
    pub fn register(&mut self, name: &str, age: &str, phone: &str) -> RegistryResult<&Patient> {
        let age = age.parse::<Age>().map_err(|e| {
            tracing::debug!("rejected patient registration: {}", e);
            e
        })?;
        Ok(self.register_patient(Patient::new(name, age, phone)))
    }

    /// Appends an already-built record and returns a reference to it.
    pub fn register_patient(&mut self, patient: Patient) -> &Patient {
        self.patients.push(patient);
        tracing::debug!(count = self.patients.len(), "patient registered");
        &self.patients[self.patients.len() - 1]
    }

    /// Returns every record in insertion order, or `None` when nothing is registered.
    pub fn list_all(&self) -> Option<&[Patient]> {
        if self.patients.is_empty() {
            None
        } else {
            Some(&self.patients)
        }
    }

    /// Finds the first patient whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.name() == name)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_ages(self.patients.iter().map(Patient::age))
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
