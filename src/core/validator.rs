//! TIN validation: format lookup, structural match, ABN verification.

use super::{
    AbnLookup, AbnVerification, FormatRegistry, FormatSpec, Rejection, ValidationResult,
    verify_abn,
};

/// Country whose 11-character matches need registry verification.
const ABN_COUNTRY: &str = "AU";
const ABN_LENGTH: usize = 11;

/// Remove every whitespace character.
pub fn normalize(raw_tin: &str) -> String {
    raw_tin.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates TINs against a [`FormatRegistry`], verifying Australian
/// Business Numbers through an [`AbnLookup`].
///
/// Holds no mutable state; one validator can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct TinValidator<L> {
    registry: FormatRegistry,
    lookup: L,
}

impl<L: AbnLookup> TinValidator<L> {
    pub fn new(registry: FormatRegistry, lookup: L) -> Self {
        Self { registry, lookup }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Validate `raw_tin` for `country_code`.
    ///
    /// Formats are tried in declaration order and the first structural
    /// match decides the outcome. An `AU` match of 11 characters is an ABN
    /// and must also pass the checksum and the registry lookup; if either
    /// fails the remaining formats are not tried. A checksum failure is
    /// reported as a format mismatch.
    ///
    /// Rejections are returned as data; this never fails.
    pub async fn validate(&self, raw_tin: &str, country_code: &str) -> ValidationResult {
        let tin = normalize(raw_tin);

        let formats = self.registry.formats_for(country_code);
        if formats.is_empty() {
            tracing::debug!(country_code, "unknown country code");
            return Rejection::UnknownCountry.into();
        }

        let Some(format) = formats.iter().find(|f| f.matches(&tin)) else {
            tracing::debug!(country_code, "no format matched");
            return Rejection::FormatMismatch.into();
        };
        tracing::debug!(
            country = format.country(),
            tin_type = format.type_name(),
            "format matched"
        );

        if requires_abn_verification(country_code, &tin) {
            return match verify_abn(&self.lookup, &tin).await {
                AbnVerification::Verified(registration) => {
                    accept(format, &tin).with_registration(registration)
                }
                AbnVerification::ChecksumFailed => Rejection::FormatMismatch.into(),
                AbnVerification::Rejected(failure) => Rejection::from(failure).into(),
            };
        }

        accept(format, &tin)
    }
}

fn requires_abn_verification(country_code: &str, normalized: &str) -> bool {
    country_code == ABN_COUNTRY && normalized.chars().count() == ABN_LENGTH
}

fn accept(format: &FormatSpec, normalized: &str) -> ValidationResult {
    ValidationResult::accepted(format.render(normalized), format.type_name())
}
