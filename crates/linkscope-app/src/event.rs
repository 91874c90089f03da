//! Application input events.
//!
//! This module defines [`AppEvent`], the inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - Terminal resizes, system ticks, and local file I/O completions.
//! - Session notifications translated from the underlying client.

use std::path::PathBuf;

use linkscope_proto::{Inbound, Role};

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Connection in progress.
    Connecting,

    /// Socket open and join sent.
    Connected {
        /// Room joined.
        room: String,
        /// Role announced.
        role: Role,
    },

    /// Socket closed.
    Disconnected {
        /// Close reason, if the peer gave one.
        reason: Option<String>,
    },

    /// Envelope received from the relay.
    Inbound(Inbound),

    /// A download was written to disk.
    Saved {
        /// Where it was written.
        path: PathBuf,
    },

    /// Error occurred.
    Error {
        /// Error description.
        message: String,
    },
}
