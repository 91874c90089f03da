//! Protocol envelopes.
//!
//! Both directions use a JSON object tagged by its `type` field. Inbound
//! decoding distinguishes three failure modes so callers can log them
//! differently: no tag, an unknown tag, and a known tag with a bad payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{FramePreview, FrameRx, PayloadKind, ProtocolError, Role};

/// `type` tags of every [`Inbound`] variant.
pub const INBOUND_TYPES: [&str; 7] =
    ["joined", "snr_update", "tx_ack", "peer_status", "frame_rx", "frame_preview", "rx_result"];

/// Envelopes sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inbound {
    /// Join confirmed.
    Joined {
        /// Room joined.
        room: String,
        /// Role granted.
        role: Role,
        /// Current channel SNR in dB.
        #[serde(default)]
        snr: Option<f64>,
    },

    /// Channel SNR changed.
    SnrUpdate {
        /// New SNR in dB.
        snr: f64,
    },

    /// Sender's transmission acknowledged.
    TxAck {
        /// Human-readable summary of the transmission.
        info: String,
    },

    /// The other role in the room came online.
    PeerStatus {
        /// Peer status (e.g. `online`).
        status: String,
    },

    /// Frame delivered to the receiver.
    FrameRx(FrameRx),

    /// Preview of the sender's last frame.
    FramePreview(FramePreview),

    /// Answer to a decrypt request.
    RxResult(RxResult),
}

impl Inbound {
    /// Decode an envelope from its JSON text.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(text).map_err(ProtocolError::Malformed)?;
        let tag = value.get("type").and_then(Value::as_str).ok_or(ProtocolError::MissingType)?;
        if !INBOUND_TYPES.contains(&tag) {
            return Err(ProtocolError::UnknownType(tag.to_owned()));
        }
        serde_json::from_value(value).map_err(ProtocolError::Malformed)
    }

    /// Wire `type` tag of this envelope.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Joined { .. } => "joined",
            Self::SnrUpdate { .. } => "snr_update",
            Self::TxAck { .. } => "tx_ack",
            Self::PeerStatus { .. } => "peer_status",
            Self::FrameRx(_) => "frame_rx",
            Self::FramePreview(_) => "frame_preview",
            Self::RxResult(_) => "rx_result",
        }
    }
}

/// Result of a server-side FEC decode and decryption.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RxResult {
    /// Authentication tag verified.
    pub ok: bool,
    /// Kind of the decrypted payload.
    #[serde(default)]
    pub kind: Option<PayloadKind>,
    /// Decrypted text, for text payloads.
    #[serde(default)]
    pub text: Option<String>,
    /// Base64 decrypted bytes, for file payloads.
    #[serde(default)]
    pub file_b64: Option<String>,
}

/// Envelopes sent by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outbound {
    /// Join a room in a role.
    Join {
        /// Room to join.
        room: String,
        /// Role to take.
        role: Role,
    },

    /// Change the channel SNR (sender only).
    SetSnr {
        /// Requested SNR in dB.
        snr: f64,
    },

    /// Encrypt and transmit a text message (sender only).
    SendText {
        /// Message text.
        text: String,
        /// Encryption password.
        password: String,
    },

    /// Encrypt and transmit a file (sender only).
    SendFile {
        /// File name.
        name: String,
        /// Base64 file contents.
        content_b64: String,
        /// Encryption password.
        password: String,
    },

    /// FEC-decode and decrypt a received frame (receiver only).
    RxDecrypt(DecryptRequest),
}

impl Outbound {
    /// Encode the envelope as JSON text.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    /// Wire `type` tag of this envelope.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Join { .. } => "join",
            Self::SetSnr { .. } => "set_snr",
            Self::SendText { .. } => "send_text",
            Self::SendFile { .. } => "send_file",
            Self::RxDecrypt(_) => "rx_decrypt",
        }
    }
}

/// Decrypt request built from a received frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptRequest {
    /// Password entered by the viewer.
    pub password: String,
    /// Payload kind of the frame.
    pub kind: PayloadKind,
    /// Base64 cipher IV.
    pub iv: String,
    /// Base64 key-derivation salt.
    pub salt: String,
    /// Noisy ciphertext as received.
    pub cipher: String,
    /// FEC scheme to undo before decrypting; serialized as `null` when absent.
    pub fec: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_joined() {
        let inbound = Inbound::decode(r#"{"type":"joined","room":"A","role":"tx","snr":12}"#).unwrap();
        assert_eq!(inbound, Inbound::Joined {
            room: "A".into(),
            role: Role::Sender,
            snr: Some(12.0)
        });
    }

    #[test]
    fn decode_joined_without_snr() {
        let inbound = Inbound::decode(r#"{"type":"joined","room":"A","role":"rx"}"#).unwrap();
        assert!(matches!(inbound, Inbound::Joined { snr: None, .. }));
    }

    #[test]
    fn decode_distinguishes_failures() {
        assert!(matches!(Inbound::decode("not json"), Err(ProtocolError::Malformed(_))));
        assert!(matches!(Inbound::decode(r#"{"room":"A"}"#), Err(ProtocolError::MissingType)));
        assert!(matches!(
            Inbound::decode(r#"{"type":"gossip"}"#),
            Err(ProtocolError::UnknownType(t)) if t == "gossip"
        ));
        assert!(matches!(
            Inbound::decode(r#"{"type":"snr_update","snr":"loud"}"#),
            Err(ProtocolError::Malformed(_))
        ));
    }

    #[test]
    fn type_names_cover_every_tag() {
        let samples = [
            Inbound::SnrUpdate { snr: 1.0 },
            Inbound::TxAck { info: String::new() },
            Inbound::PeerStatus { status: "online".into() },
            Inbound::FramePreview(FramePreview::default()),
            Inbound::RxResult(RxResult::default()),
        ];
        for inbound in samples {
            assert!(INBOUND_TYPES.contains(&inbound.type_name()));
        }
    }

    #[test]
    fn encode_join() {
        let json = Outbound::Join { room: "A".into(), role: Role::Sender }.encode().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!({"type": "join", "room": "A", "role": "tx"}));
    }

    #[test]
    fn encode_decrypt_request_keeps_null_fec() {
        let request = DecryptRequest {
            password: "pw".into(),
            kind: PayloadKind::Text,
            iv: "aXY=".into(),
            salt: "c2FsdA==".into(),
            cipher: "Y2lwaGVy".into(),
            fec: None,
        };
        let json = Outbound::RxDecrypt(request).encode().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "rx_decrypt");
        assert_eq!(value["kind"], "text");
        assert!(value["fec"].is_null());
        assert_eq!(value["cipher"], "Y2lwaGVy");
    }

    #[test]
    fn encode_send_file_wire_shape() {
        let json = Outbound::SendFile {
            name: "notes.txt".into(),
            content_b64: "aGk=".into(),
            password: "pw".into(),
        }
        .encode()
        .unwrap();
        insta::assert_snapshot!(json, @r#"{"type":"send_file","name":"notes.txt","content_b64":"aGk=","password":"pw"}"#);
    }
}
