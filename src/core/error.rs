use thiserror::Error;

/// Faults that are not part of validating a TIN.
///
/// Rejected input never surfaces here; it is reported through
/// [`ValidationResult`](super::ValidationResult) instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TinError {
    /// A format template could not be compiled.
    #[error("template error: {0}")]
    Template(String),

    /// Registry client configuration is unusable (bad URL, client build failure).
    #[error("configuration error: {0}")]
    Config(String),

    /// The registry returned a document that is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(String),
}
