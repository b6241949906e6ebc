//! HTTP client for the ABN registry.

use reqwest::{StatusCode, Url};

use super::{RegistryConfig, parse_registry_document};
use crate::core::{AbnLookup, LookupFailure, LookupOutcome, TinError};

/// Path of the lookup endpoint below the configured base URL.
pub const QUERY_PATH: &str = "queryABN";

/// [`AbnLookup`] backed by `GET {base}/queryABN?abn=...`.
///
/// One request per lookup, no retries. Every outcome, including transport
/// failures, is classified into a [`LookupOutcome`].
#[derive(Debug, Clone)]
pub struct AbnRegistryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AbnRegistryClient {
    /// Build a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`TinError::Config`] if the base URL does not parse or the
    /// HTTP client cannot be built.
    pub fn new(config: &RegistryConfig) -> Result<Self, TinError> {
        let base = config.base_url.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{base}/{QUERY_PATH}"))
            .map_err(|e| TinError::Config(format!("invalid registry URL '{base}': {e}")))?;

        // redirects are classified like any other unexpected status
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| TinError::Config(format!("HTTP client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// The lookup endpoint, without query.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, abn: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("abn", abn);
        url
    }
}

impl AbnLookup for AbnRegistryClient {
    async fn lookup(&self, abn: &str) -> LookupOutcome {
        let url = self.request_url(abn);
        let resp = match self.http.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(abn, error = %e, "ABN registry request failed");
                return LookupOutcome::Rejected(LookupFailure::Unavailable);
            }
        };

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(abn, %status, "ABN registry returned an error status");
            return LookupOutcome::Rejected(classify_error_status(status));
        }

        match resp.text().await {
            Ok(body) => classify_document(&body),
            Err(e) => {
                tracing::warn!(abn, error = %e, "ABN registry response body could not be read");
                LookupOutcome::Rejected(LookupFailure::Unavailable)
            }
        }
    }
}

/// Failure for a non-2xx registry status.
pub fn classify_error_status(status: StatusCode) -> LookupFailure {
    match status {
        StatusCode::NOT_FOUND => LookupFailure::NotRegistered,
        StatusCode::INTERNAL_SERVER_ERROR => LookupFailure::Unavailable,
        _ => LookupFailure::Unexpected,
    }
}

/// Outcome for the body of a 2xx registry response.
pub fn classify_document(body: &str) -> LookupOutcome {
    let doc = match parse_registry_document(body) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!(error = %e, "malformed ABN registry document");
            return LookupOutcome::Rejected(LookupFailure::Unexpected);
        }
    };
    if doc.is_gst_registered() {
        LookupOutcome::Registered(doc.into_registration())
    } else {
        LookupOutcome::Rejected(LookupFailure::NotGstRegistered)
    }
}
