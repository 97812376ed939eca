use thiserror::Error;

/// Failures inside the attribution store. None of these reach callers of
/// the public operations; they are logged and the operation falls back.
#[derive(Debug, Error)]
pub enum AttributionError {
    #[error("session storage rejected the operation: {0}")]
    Storage(String),
    #[error("attribution record could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("stored attribution record is malformed: {0}")]
    Decode(#[source] serde_json::Error),
}
