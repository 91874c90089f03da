//! Session roles.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Role a client plays in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Transmitting side: adjusts the channel and sends payloads.
    #[serde(rename = "tx")]
    Sender,
    /// Receiving side: gets frames and requests decryption.
    #[serde(rename = "rx")]
    Receiver,
}

impl Role {
    /// Wire identifier (`tx` or `rx`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sender => "tx",
            Self::Receiver => "rx",
        }
    }

    /// Upper-case label shown in the connection status (`TX` or `RX`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Sender => "TX",
            Self::Receiver => "RX",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tx" | "sender" => Ok(Self::Sender),
            "rx" | "receiver" => Ok(Self::Receiver),
            other => Err(format!("unknown role '{other}', expected tx or rx")),
        }
    }
}
