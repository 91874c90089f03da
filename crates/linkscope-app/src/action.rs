//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::path::PathBuf;

use linkscope_proto::{Outbound, Role};

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Open a session and join a room.
    Connect {
        /// Room to join.
        room: String,
        /// Role to announce.
        role: Role,
    },

    /// Send an envelope over the open session.
    Send(Outbound),

    /// Read, encode, and send files one after another.
    SendFiles {
        /// Files in submission order.
        paths: Vec<PathBuf>,
    },

    /// Write a decrypted file to disk.
    SaveDownload {
        /// Destination path.
        path: PathBuf,
        /// File contents.
        bytes: Vec<u8>,
    },
}
