//! Australian Business Number verification: checksum and registry lookup.

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weights applied to the 11 ABN digits, index-aligned.
pub const ABN_WEIGHTS: [u32; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Modulus the weighted sum must divide by.
pub const ABN_MODULUS: u32 = 89;

/// Local ABN checksum. Pure, never touches the network.
///
/// Subtract 1 from the first digit, weight every digit with
/// [`ABN_WEIGHTS`] and require the sum to be divisible by [`ABN_MODULUS`].
/// Anything other than exactly 11 ASCII digits is invalid.
pub fn abn_checksum_valid(abn: &str) -> bool {
    if abn.len() != ABN_WEIGHTS.len() || !abn.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: i64 = abn
        .bytes()
        .map(|b| i64::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| if i == 0 { d - 1 } else { d })
        .zip(ABN_WEIGHTS)
        .map(|(d, w)| d * i64::from(w))
        .sum();

    sum % i64::from(ABN_MODULUS) == 0
}

/// Registry details of a confirmed, GST-registered business.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BusinessRegistration {
    /// Registered organisation name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `"state, postcode"` with absent parts left out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl BusinessRegistration {
    /// Build from the registry's address fragments.
    pub fn new(name: Option<String>, state: Option<String>, postcode: Option<String>) -> Self {
        let fragments: Vec<String> = [state, postcode]
            .into_iter()
            .flatten()
            .filter(|f| !f.is_empty())
            .collect();
        Self {
            name,
            address: (!fragments.is_empty()).then(|| fragments.join(", ")),
        }
    }
}

/// Why the registry did not confirm an ABN.
///
/// The `Display` text is the message reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LookupFailure {
    /// Registered, but not for GST.
    #[error("Business is not GST registered")]
    NotGstRegistered,
    /// The registry does not know the ABN (HTTP 404).
    #[error("Business is not registered")]
    NotRegistered,
    /// The registry failed (HTTP 500) or could not be contacted.
    #[error("Registration API could not be reached")]
    Unavailable,
    /// Any other status, or a response that could not be read.
    #[error("Unexpected error during validation")]
    Unexpected,
}

/// Classified result of one registry lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Registered(BusinessRegistration),
    Rejected(LookupFailure),
}

/// External ABN registry.
///
/// Implementations classify every response into a [`LookupOutcome`]; they
/// never fail. The HTTP implementation is
/// `registry::AbnRegistryClient` (feature `registry`).
pub trait AbnLookup: Send + Sync {
    /// Look up an 11-digit ABN.
    fn lookup(&self, abn: &str) -> impl Future<Output = LookupOutcome> + Send;
}

impl<L: AbnLookup> AbnLookup for std::sync::Arc<L> {
    fn lookup(&self, abn: &str) -> impl Future<Output = LookupOutcome> + Send {
        (**self).lookup(abn)
    }
}

/// Outcome of the two-stage ABN check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbnVerification {
    /// Checksum passed and the registry confirmed GST registration.
    Verified(BusinessRegistration),
    /// Checksum failed; the registry was not asked.
    ChecksumFailed,
    /// Checksum passed but the registry rejected the ABN.
    Rejected(LookupFailure),
}

/// Verify an ABN: local checksum first, then one registry lookup.
pub async fn verify_abn<L: AbnLookup>(lookup: &L, abn: &str) -> AbnVerification {
    if !abn_checksum_valid(abn) {
        tracing::debug!(abn, "ABN checksum failed, skipping registry lookup");
        return AbnVerification::ChecksumFailed;
    }
    match lookup.lookup(abn).await {
        LookupOutcome::Registered(registration) => AbnVerification::Verified(registration),
        LookupOutcome::Rejected(failure) => {
            tracing::debug!(abn, %failure, "ABN rejected by registry");
            AbnVerification::Rejected(failure)
        }
    }
}
