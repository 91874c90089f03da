//! Client error types.

use linkscope_proto::ProtocolError;
use thiserror::Error;

/// Errors produced by the session state machine.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Envelope could not be encoded.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors resolving the server endpoint.
#[derive(Debug, Error)]
pub enum EndpointError {
    /// Origin is not a valid URL.
    #[error("invalid server URL: {0}")]
    Parse(#[from] url::ParseError),

    /// Origin uses a scheme with no WebSocket counterpart.
    #[error("unsupported URL scheme '{0}', expected http, https, ws or wss")]
    UnsupportedScheme(String),
}
