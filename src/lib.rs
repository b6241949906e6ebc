//! # tincheck
//!
//! Tax identification number (TIN) validation by country format, with
//! checksum and registry verification of Australian Business Numbers.
//!
//! Formats are written as templates (`N` digit, `A` non-digit,
//! `X` alphanumeric, `[...]` optional literals) and compiled once into
//! full-string matchers. Rejections are data, never errors: `validate`
//! always returns a [`ValidationResult`](core::ValidationResult).
//!
//! ## Quick Start
//!
//! ```rust
//! use tincheck::core::*;
//!
//! struct NoRegistry;
//!
//! impl AbnLookup for NoRegistry {
//!     async fn lookup(&self, _abn: &str) -> LookupOutcome {
//!         LookupOutcome::Rejected(LookupFailure::Unavailable)
//!     }
//! }
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let validator = TinValidator::new(FormatRegistry::builtin().unwrap(), NoRegistry);
//! let result = validator.validate("123456789", "CA").await;
//!
//! assert!(result.valid);
//! assert_eq!(result.formatted_tin.as_deref(), Some("123456789RT0001"));
//! assert_eq!(result.tin_type.as_deref(), Some("ca_gst"));
//! # });
//! ```
//!
//! ## Built-in formats
//!
//! | Country | Format | Template |
//! |---------|--------|----------|
//! | AU | `au_abn` | `NN NNN NNN NNN` |
//! | AU | `au_acn` | `NNN NNN NNN` |
//! | CA | `ca_gst` | `NNNNNNNNN[RT0001]` |
//! | IN | `in_gst` | `NNXXXXXXXXXXNAN` |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Templates, format registry, ABN checksum, validator |
//! | `registry` (default) | HTTP ABN registry client |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "registry")]
pub mod registry;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
