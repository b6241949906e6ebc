//! ABN registry client.
//!
//! Implements [`AbnLookup`](crate::core::AbnLookup) over HTTP and parses the
//! registry's XML result document.
//!
//! # Example
//!
//! ```ignore
//! use tincheck::registry::*;
//!
//! let validator = TinValidator::from_config(&RegistryConfig::from_env()?)?;
//! let result = validator.validate("10 120 000 004", "AU").await;
//! ```

mod client;
mod config;
mod document;

pub use client::{AbnRegistryClient, QUERY_PATH, classify_document, classify_error_status};
pub use config::{DEFAULT_BASE_URL, ENV_BASE_URL, ENV_TIMEOUT_SECS, RegistryConfig};
pub use document::{RegistryDocument, parse_registry_document};

pub use crate::core::TinValidator;
use crate::core::{FormatRegistry, TinError};

impl TinValidator<AbnRegistryClient> {
    /// Validator over the built-in formats, verifying ABNs against the
    /// registry described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Config`] for an unusable registry configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, TinError> {
        Ok(Self::new(
            FormatRegistry::builtin()?,
            AbnRegistryClient::new(config)?,
        ))
    }
}
