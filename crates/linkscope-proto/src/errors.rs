//! Protocol error types.

use thiserror::Error;

/// Errors raised while encoding or decoding protocol data.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Envelope is not a JSON object with a string `type` field.
    #[error("envelope has no type tag")]
    MissingType,

    /// Envelope carries a `type` this client does not handle.
    #[error("unknown envelope type: {0}")]
    UnknownType(String),

    /// Envelope has a known `type` but its payload does not match.
    #[error("malformed envelope: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Envelope could not be serialized.
    #[error("failed to encode envelope: {0}")]
    Encode(#[source] serde_json::Error),

    /// Text payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}
