//! Validation result and rejection reasons.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BusinessRegistration, LookupFailure};

/// Why a TIN was rejected. The `Display` text is what ends up in
/// [`ValidationResult::errors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Rejection {
    /// No formats are configured for the country.
    #[error("Country code does not exist")]
    UnknownCountry,
    /// The input matches none of the country's formats.
    #[error("TIN format does not match")]
    FormatMismatch,
    /// The ABN registry did not confirm the business.
    #[error(transparent)]
    Registry(#[from] LookupFailure),
}

/// Outcome of validating one TIN.
///
/// `formatted_tin` and `tin_type` are set only when `valid` is true, and
/// `errors` is empty exactly when `valid` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Human-readable reasons, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Canonical display form, e.g. `123456789RT0001`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_tin: Option<String>,
    /// Name of the matched format, e.g. `ca_gst`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tin_type: Option<String>,
    /// Registry details, present for a verified ABN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_registration: Option<BusinessRegistration>,
}

impl ValidationResult {
    /// A TIN accepted under the format `tin_type`.
    pub fn accepted(formatted_tin: impl Into<String>, tin_type: impl Into<String>) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            formatted_tin: Some(formatted_tin.into()),
            tin_type: Some(tin_type.into()),
            business_registration: None,
        }
    }

    /// A rejected TIN.
    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            valid: false,
            errors: vec![rejection.to_string()],
            formatted_tin: None,
            tin_type: None,
            business_registration: None,
        }
    }

    /// Attach registry details to an accepted result.
    pub fn with_registration(mut self, registration: BusinessRegistration) -> Self {
        self.business_registration = Some(registration);
        self
    }
}

impl From<Rejection> for ValidationResult {
    fn from(rejection: Rejection) -> Self {
        Self::rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::UnknownCountry.to_string(), "Country code does not exist");
        assert_eq!(Rejection::FormatMismatch.to_string(), "TIN format does not match");
        assert_eq!(
            Rejection::from(LookupFailure::NotRegistered).to_string(),
            "Business is not registered"
        );
    }

    #[test]
    fn rejected_has_no_success_fields() {
        let r = ValidationResult::rejected(Rejection::FormatMismatch);
        assert!(!r.valid);
        assert_eq!(r.errors, ["TIN format does not match"]);
        assert!(r.formatted_tin.is_none());
        assert!(r.tin_type.is_none());
    }

    #[test]
    fn accepted_has_no_errors() {
        let r = ValidationResult::accepted("123 456 789", "au_acn");
        assert!(r.valid);
        assert!(r.errors.is_empty());
        assert_eq!(r.tin_type.as_deref(), Some("au_acn"));
    }
}
