//! Observable application state types.
//!
//! These structures are the view model: the subset of session state needed
//! to render the UI, already formatted for display.

use std::collections::VecDeque;

use linkscope_proto::{FrameSummary, Role};
use linkscope_render::DisplayList;

use crate::format::{PLACEHOLDER, format_ber, format_snr, truncate_cipher};

/// Maximum number of log entries kept.
pub const LOG_CAPACITY: usize = 500;

/// Connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No socket.
    Disconnected,
    /// Socket opening or join not yet sent.
    Connecting,
    /// Socket open and join sent.
    Connected {
        /// Role announced in the join.
        role: Role,
    },
}

impl ConnectionState {
    /// Status line text (`Connected (TX)`).
    pub fn label(&self) -> String {
        match self {
            Self::Disconnected => "Disconnected".to_owned(),
            Self::Connecting => "Connecting…".to_owned(),
            Self::Connected { role } => format!("Connected ({})", role.label()),
        }
    }
}

/// Formatted telemetry of one frame.
///
/// Each slot holds display text; missing fields show a placeholder rather
/// than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPanel {
    /// Modulation scheme name, `-` when absent.
    pub scheme: String,
    /// `SNR: 8.0 dB`.
    pub snr: String,
    /// `BER: 3.40e-4`.
    pub ber: String,
    /// `FEC: rep3`, `FEC: none` when absent.
    pub fec: String,
    /// Ciphertext before channel coding.
    pub cipher_raw: String,
    /// Ciphertext after clean decoding.
    pub cipher_clean: String,
    /// Ciphertext after noisy decoding.
    pub cipher_noisy: String,
    /// Raw bit string.
    pub bits_raw: String,
    /// Clean-channel bit string.
    pub bits_clean: String,
    /// Noisy-channel bit string.
    pub bits_noisy: String,
}

impl Default for PreviewPanel {
    fn default() -> Self {
        Self {
            scheme: "-".to_owned(),
            snr: format!("SNR: {PLACEHOLDER} dB"),
            ber: format!("BER: {PLACEHOLDER}"),
            fec: "FEC: none".to_owned(),
            cipher_raw: String::new(),
            cipher_clean: String::new(),
            cipher_noisy: String::new(),
            bits_raw: String::new(),
            bits_clean: String::new(),
            bits_noisy: String::new(),
        }
    }
}

impl PreviewPanel {
    /// Format a frame summary.
    pub fn from_summary(summary: &FrameSummary) -> Self {
        let text = |field: &Option<String>| field.clone().unwrap_or_default();
        let cipher = |field: &Option<String>| field.as_deref().map(truncate_cipher).unwrap_or_default();

        Self {
            scheme: summary.scheme.clone().unwrap_or_else(|| "-".to_owned()),
            snr: format!("SNR: {} dB", format_snr(summary.snr)),
            ber: format!("BER: {}", format_ber(summary.ber)),
            fec: format!("FEC: {}", summary.fec.as_deref().unwrap_or("none")),
            cipher_raw: cipher(&summary.cipher_raw),
            cipher_clean: cipher(&summary.cipher_clean),
            cipher_noisy: cipher(&summary.cipher),
            bits_raw: text(&summary.bits_raw),
            bits_clean: text(&summary.bits_clean),
            bits_noisy: text(&summary.bits_noisy),
        }
    }
}

/// Canvas slots on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotSlot {
    /// Received constellation, clean channel.
    RxConstClean,
    /// Received constellation, noisy channel.
    RxConstNoisy,
    /// Transmit preview constellation, clean channel.
    TxConstClean,
    /// Transmit preview constellation, noisy channel.
    TxConstNoisy,
    /// Transmit preview waveform, clean channel.
    TxWaveClean,
    /// Transmit preview waveform, noisy channel.
    TxWaveNoisy,
    /// Transmit preview bit chart.
    TxBits,
}

impl PlotSlot {
    /// Every slot, in storage order.
    pub const ALL: [Self; 7] = [
        Self::RxConstClean,
        Self::RxConstNoisy,
        Self::TxConstClean,
        Self::TxConstNoisy,
        Self::TxWaveClean,
        Self::TxWaveNoisy,
        Self::TxBits,
    ];

    /// Logical drawing size (width, height).
    pub fn size(self) -> (f64, f64) {
        match self {
            Self::RxConstClean | Self::RxConstNoisy | Self::TxConstClean | Self::TxConstNoisy => {
                (240.0, 240.0)
            },
            Self::TxWaveClean | Self::TxWaveNoisy => (480.0, 160.0),
            Self::TxBits => (480.0, 120.0),
        }
    }

    /// Panel title.
    pub fn title(self) -> &'static str {
        match self {
            Self::RxConstClean | Self::TxConstClean => "Constellation (clean)",
            Self::RxConstNoisy | Self::TxConstNoisy => "Constellation (noisy)",
            Self::TxWaveClean => "Waveform (clean)",
            Self::TxWaveNoisy => "Waveform (noisy)",
            Self::TxBits => "Bits",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Display lists for every [`PlotSlot`].
#[derive(Debug, Clone)]
pub struct Plots {
    surfaces: [DisplayList; 7],
}

impl Default for Plots {
    fn default() -> Self {
        Self {
            surfaces: PlotSlot::ALL.map(|slot| {
                let (width, height) = slot.size();
                DisplayList::new(width, height)
            }),
        }
    }
}

impl Plots {
    /// Drawing in a slot.
    pub fn get(&self, slot: PlotSlot) -> &DisplayList {
        &self.surfaces[slot.index()]
    }

    /// Mutable drawing in a slot.
    pub fn get_mut(&mut self, slot: PlotSlot) -> &mut DisplayList {
        &mut self.surfaces[slot.index()]
    }
}

/// A decrypted file offered for saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    /// Suggested file name.
    pub name: String,
    /// Decrypted bytes.
    pub bytes: Vec<u8>,
}

/// Bounded log, newest entry first.
#[derive(Debug, Clone)]
pub struct LogPanel {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }
}

impl LogPanel {
    /// Log keeping at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity.min(64)), capacity }
    }

    /// Prepend an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        tracing::debug!(%entry, "log");
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
