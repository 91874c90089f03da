//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the application completely decoupled from I/O and
//! protocol mechanics.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Tracks connection status, the SNR readout, and the password field.
//! - Holds the receiver and sender preview panels and their plots.
//! - Keeps the log panel and the list of decrypted downloads.
//! - Composes outbound envelopes, enforcing sender-only operations.

use std::path::PathBuf;

use linkscope_proto::{Outbound, Role};

use crate::{
    AppAction, AppEvent, ConnectionState, DecryptCoordinator, Download, LogPanel, Plots,
    PreviewPanel,
    format::{PLACEHOLDER, format_db},
};

/// Lowest SNR the slider reaches, in dB.
pub const SNR_MIN: f64 = -5.0;

/// Highest SNR the slider reaches, in dB.
pub const SNR_MAX: f64 = 30.0;

/// Initial slider position, matching the relay's default channel.
pub const SNR_DEFAULT: f64 = 8.0;

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal or socket.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state.
    pub(crate) state: ConnectionState,
    /// Role this viewer announces.
    pub(crate) role: Role,
    /// Room last requested.
    pub(crate) room: Option<String>,
    /// Password field, read whenever an envelope needs it.
    pub(crate) password: String,
    /// Slider position in dB.
    pub(crate) snr: f64,
    /// SNR readout (`12 dB`).
    pub(crate) snr_display: String,
    /// Receiver preview of the last received frame.
    pub(crate) rx_preview: PreviewPanel,
    /// Sender preview of the last transmitted frame.
    pub(crate) tx_preview: PreviewPanel,
    /// Plot drawings.
    pub(crate) plots: Plots,
    /// Log panel, newest first.
    pub(crate) log: LogPanel,
    /// Decrypted files, newest first.
    pub(crate) downloads: Vec<Download>,
    /// Pending decrypt round-trips.
    pub(crate) decrypt: DecryptCoordinator,
    /// Default directory for saved downloads.
    download_dir: PathBuf,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App for the given role.
    pub fn new(role: Role) -> Self {
        Self {
            state: ConnectionState::Disconnected,
            role,
            room: None,
            password: String::new(),
            snr: SNR_DEFAULT,
            snr_display: PLACEHOLDER.to_owned(),
            rx_preview: PreviewPanel::default(),
            tx_preview: PreviewPanel::default(),
            plots: Plots::default(),
            log: LogPanel::default(),
            downloads: Vec::new(),
            decrypt: DecryptCoordinator::new(),
            download_dir: PathBuf::from("."),
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Connecting => {
                self.state = ConnectionState::Connecting;
                vec![AppAction::Render]
            },
            AppEvent::Connected { room, role } => {
                self.state = ConnectionState::Connected { role };
                self.room = Some(room);
                self.decrypt.reset();
                vec![AppAction::Render]
            },
            AppEvent::Disconnected { reason } => {
                self.state = ConnectionState::Disconnected;
                self.decrypt.reset();
                match reason {
                    Some(reason) => self.log.push(format!("Disconnected: {reason}")),
                    None => self.log.push("Disconnected"),
                }
                vec![AppAction::Render]
            },
            AppEvent::Inbound(inbound) => self.dispatch(inbound),
            AppEvent::Saved { path } => {
                self.log.push(format!("Saved {}", path.display()));
                vec![AppAction::Render]
            },
            AppEvent::Error { message } => {
                self.log.push(format!("Error: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Join a room in this viewer's role, replacing any open session.
    pub fn join(&mut self, room: impl Into<String>) -> Vec<AppAction> {
        let room = room.into().trim().to_owned();
        self.state = ConnectionState::Connecting;
        self.room = Some(room.clone());
        vec![AppAction::Connect { room, role: self.role }, AppAction::Render]
    }

    /// Move the SNR slider and request the new channel SNR.
    ///
    /// The readout changes immediately; the relay echoes `snr_update` later.
    pub fn set_snr(&mut self, snr: f64) -> Vec<AppAction> {
        if !self.require_sender("SNR control") {
            return vec![AppAction::Render];
        }
        self.snr = snr;
        self.snr_display = format_db(snr);
        vec![AppAction::Send(Outbound::SetSnr { snr }), AppAction::Render]
    }

    /// Nudge the slider by `delta` dB, clamped to its range.
    pub fn adjust_snr(&mut self, delta: f64) -> Vec<AppAction> {
        self.set_snr((self.snr + delta).clamp(SNR_MIN, SNR_MAX))
    }

    /// Encrypt and transmit a text message. Blank input is ignored.
    pub fn send_text(&mut self, text: &str) -> Vec<AppAction> {
        let text = text.trim();
        if text.is_empty() {
            return vec![];
        }
        if !self.require_sender("Sending") {
            return vec![AppAction::Render];
        }
        vec![
            AppAction::Send(Outbound::SendText { text: text.to_owned(), password: self.password.clone() }),
            AppAction::Render,
        ]
    }

    /// Transmit files in order. The runtime reads and encodes each one.
    pub fn send_files(&mut self, paths: Vec<PathBuf>) -> Vec<AppAction> {
        if paths.is_empty() {
            return vec![];
        }
        if !self.require_sender("Sending") {
            return vec![AppAction::Render];
        }
        vec![AppAction::SendFiles { paths }, AppAction::Render]
    }

    /// Replace the password used for subsequent envelopes.
    pub fn set_password(&mut self, password: impl Into<String>) -> Vec<AppAction> {
        self.password = password.into();
        vec![AppAction::Render]
    }

    /// Write the download at `index` (0 is newest) to `path`, or to the
    /// download directory under its suggested name.
    pub fn save_download(&mut self, index: usize, path: Option<PathBuf>) -> Vec<AppAction> {
        let Some(download) = self.downloads.get(index) else {
            self.log.push(format!("No download #{}", index + 1));
            return vec![AppAction::Render];
        };
        let path = path.unwrap_or_else(|| self.download_dir.join(&download.name));
        vec![AppAction::SaveDownload { path, bytes: download.bytes.clone() }]
    }

    /// Leave the application.
    pub fn quit(&mut self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Set the default directory for saved downloads.
    pub fn set_download_dir(&mut self, dir: impl Into<PathBuf>) {
        self.download_dir = dir.into();
    }

    /// Add an entry to the log panel.
    pub fn log(&mut self, entry: impl Into<String>) {
        self.log.push(entry);
    }

    fn require_sender(&mut self, what: &str) -> bool {
        if self.role == Role::Sender {
            return true;
        }
        self.log.push(format!("{what} is only available to the sender"));
        false
    }

    /// Current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    /// Status line text.
    pub fn status(&self) -> String {
        self.state.label()
    }

    /// Role this viewer announces.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Room last requested.
    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    /// Password field.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Slider position in dB.
    pub fn snr(&self) -> f64 {
        self.snr
    }

    /// SNR readout.
    pub fn snr_display(&self) -> &str {
        &self.snr_display
    }

    /// Receiver preview panel.
    pub fn rx_preview(&self) -> &PreviewPanel {
        &self.rx_preview
    }

    /// Sender preview panel.
    pub fn tx_preview(&self) -> &PreviewPanel {
        &self.tx_preview
    }

    /// Plot drawings.
    pub fn plots(&self) -> &Plots {
        &self.plots
    }

    /// Log panel.
    pub fn log_panel(&self) -> &LogPanel {
        &self.log
    }

    /// Decrypted files, newest first.
    pub fn downloads(&self) -> &[Download] {
        &self.downloads
    }

    /// Decrypt requests awaiting a result.
    pub fn pending_decrypts(&self) -> usize {
        self.decrypt.pending()
    }

    /// Default directory for saved downloads.
    pub fn download_dir(&self) -> &std::path::Path {
        &self.download_dir
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
