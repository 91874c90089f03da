//! Client events and actions.

use linkscope_proto::{Inbound, Outbound, Role};

/// Events the caller feeds into the client.
///
/// The caller is responsible for:
/// - Opening and closing the transport when asked
/// - Reporting transport lifecycle changes
/// - Forwarding every inbound text message, in arrival order
/// - Forwarding application intents as [`Outbound`] envelopes
#[derive(Debug, Clone)]
pub enum ClientEvent {
    /// Application wants to join a room.
    Connect {
        /// Room to join.
        room: String,
        /// Role to take.
        role: Role,
    },

    /// Transport finished opening.
    TransportOpened,

    /// Transport closed, locally or by the peer.
    TransportClosed {
        /// Close reason, when one is known.
        reason: Option<String>,
    },

    /// Application wants to send an envelope.
    Send(Outbound),

    /// Text message received from the server.
    MessageReceived(String),
}

/// Actions produced by the client for the caller to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientAction {
    /// Open a transport to the server.
    OpenTransport,

    /// Tear down the current transport without reporting it as closed.
    CloseTransport,

    /// Write a text message to the transport.
    Transmit(String),

    /// Session is open and the join envelope has been queued.
    Opened {
        /// Room joined.
        room: String,
        /// Role taken.
        role: Role,
    },

    /// Session closed.
    Closed {
        /// Close reason, when one is known.
        reason: Option<String>,
    },

    /// Decoded envelope ready for dispatch.
    Deliver(Inbound),
}

/// Lifecycle notifications from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Text message from the server.
    Message(String),

    /// Connection is gone.
    Closed {
        /// Close reason, when one is known.
        reason: Option<String>,
    },
}
