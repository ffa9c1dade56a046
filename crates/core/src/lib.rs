//! # Vida Core
//!
//! Core business logic for the Vida+ clinic patient registry.
//!
//! This crate contains pure data operations over an in-memory registry:
//! - Patient registration with fallible age parsing
//! - Listing in insertion order and exact-name search
//! - Aggregate age statistics
//!
//! **No console concerns**: prompting, menus and rendering belong in `vida-cli`.

pub mod config;
pub mod constants;
pub mod error;
pub mod patient;
pub mod registry;
pub mod statistics;

pub use config::ClinicConfig;
pub use error::{RegistryError, RegistryResult};
pub use patient::{Patient, RecordEcho};
pub use registry::Registry;
pub use statistics::Statistics;

pub use vida_types::{Age, AgeError, NonEmptyText, TextError};
