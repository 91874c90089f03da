//! Binary-to-text codec.
//!
//! The wire protocol is text-only, so binary payloads (file contents,
//! ciphertexts, IVs, salts) travel as standard padded base64.

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::ProtocolError;

/// Encode raw bytes for transport.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a transported payload back into raw bytes.
///
/// Surrounding whitespace is ignored.
pub fn decode(text: &str) -> Result<Vec<u8>, ProtocolError> {
    Ok(STANDARD.decode(text.trim())?)
}
