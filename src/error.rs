use thiserror::Error;

/// Failure modes of the acquisition chain. All of these are caught by the
/// pipeline and downgraded to the next fallback stage; none escape
/// `pipeline::acquire`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network/transport failure, non-2xx response, or a listing with
    /// nothing usable in it.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),

    /// The payload requires spreadsheet decoding but the `excel` feature
    /// was not compiled in.
    #[error("spreadsheet decoding is not available (crate built without the `excel` feature)")]
    MissingDecoder,

    /// Bytes were fetched but do not parse as the declared format.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}
