//! # educator-settings
//!
//! Layered configuration: compiled defaults, deep-merged with an optional
//! JSON settings file, overridden by environment variables.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{load_settings, load_settings_from_path};
pub use types::{EducatorSettings, ProviderSettings, ServerSettings};
