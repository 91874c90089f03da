//! Simulated RF frame telemetry.
//!
//! A frame is one transmitted unit: the modulation chosen for it, the channel
//! conditions it crossed, three ciphertext variants (raw, FEC-encoded clean,
//! and noisy as received) and the sample data needed to plot it.
//!
//! Every preview field is optional on the wire. Decoding never fails because
//! a numeric or plot field is missing; the UI renders a placeholder instead.

use serde::{Deserialize, Serialize};

/// Kind of payload carried by a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    /// UTF-8 text message.
    Text,
    /// Opaque file contents.
    File,
}

/// One complex baseband sample.
///
/// Accepted on the wire as an `[i, q]` pair or an `{"i": .., "q": ..}`
/// object; always written as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireIqPoint", into = "[f64; 2]")]
pub struct IqPoint {
    /// In-phase component.
    pub i: f64,
    /// Quadrature component.
    pub q: f64,
}

impl IqPoint {
    /// Create a sample from its components.
    pub fn new(i: f64, q: f64) -> Self {
        Self { i, q }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireIqPoint {
    Pair([f64; 2]),
    Object { i: f64, q: f64 },
}

impl From<WireIqPoint> for IqPoint {
    fn from(wire: WireIqPoint) -> Self {
        match wire {
            WireIqPoint::Pair([i, q]) | WireIqPoint::Object { i, q } => Self { i, q },
        }
    }
}

impl From<IqPoint> for [f64; 2] {
    fn from(point: IqPoint) -> Self {
        [point.i, point.q]
    }
}

/// Time-domain I and Q sample series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IqSeries {
    /// In-phase samples.
    #[serde(rename = "I", default)]
    pub i: Vec<f64>,
    /// Quadrature samples.
    #[serde(rename = "Q", default)]
    pub q: Vec<f64>,
}

impl IqSeries {
    /// True when both series are empty.
    pub fn is_empty(&self) -> bool {
        self.i.is_empty() && self.q.is_empty()
    }
}

/// Preview fields shared by received frames and sender-side previews.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSummary {
    /// Modulation scheme name (e.g. `QPSK`).
    pub scheme: Option<String>,
    /// Channel SNR in dB.
    pub snr: Option<f64>,
    /// Expected bit-error rate for the scheme at this SNR.
    pub ber: Option<f64>,
    /// FEC scheme name, absent when the frame is unprotected.
    pub fec: Option<String>,
    /// Ciphertext before FEC and channel.
    pub cipher_raw: Option<String>,
    /// Ciphertext after FEC encoding, before the channel.
    pub cipher_clean: Option<String>,
    /// Ciphertext as received through the noisy channel.
    pub cipher: Option<String>,
    /// Raw ciphertext bits as display text.
    pub bits_raw: Option<String>,
    /// FEC-encoded bits as display text.
    pub bits_clean: Option<String>,
    /// Received bits as display text.
    pub bits_noisy: Option<String>,
    /// Constellation of the transmitted symbols.
    pub const_clean: Option<Vec<IqPoint>>,
    /// Constellation of the received symbols.
    pub const_noisy: Option<Vec<IqPoint>>,
}

/// Frame delivered to the receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRx {
    /// Preview fields.
    #[serde(flatten)]
    pub summary: FrameSummary,
    /// Payload kind, echoed back in the decrypt request.
    pub kind: PayloadKind,
    /// Base64 cipher IV.
    pub iv: String,
    /// Base64 key-derivation salt.
    pub salt: String,
    /// Original file name for file frames.
    #[serde(default)]
    pub name: Option<String>,
}

/// Preview of the last frame, echoed back to the sender.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FramePreview {
    /// Preview fields.
    #[serde(flatten)]
    pub summary: FrameSummary,
    /// Transmitted baseband waveform.
    #[serde(default)]
    pub wave_clean: Option<IqSeries>,
    /// Received baseband waveform.
    #[serde(default)]
    pub wave_noisy: Option<IqSeries>,
    /// Raw ciphertext bits (0/1) for the bit chart.
    #[serde(default)]
    pub bits_plot_raw: Option<Vec<u8>>,
    /// FEC-encoded bits (0/1) for the bit chart.
    #[serde(default)]
    pub bits_plot_clean: Option<Vec<u8>>,
    /// Received bits (0/1) for the bit chart.
    #[serde(default)]
    pub bits_plot_noisy: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iq_point_accepts_pair_and_object() {
        let points: Vec<IqPoint> =
            serde_json::from_str(r#"[[0.5, -0.5], {"i": 1, "q": 0}]"#).unwrap();
        assert_eq!(points, vec![IqPoint::new(0.5, -0.5), IqPoint::new(1.0, 0.0)]);
    }

    #[test]
    fn iq_point_serializes_as_pair() {
        let json = serde_json::to_string(&IqPoint::new(0.25, 1.0)).unwrap();
        assert_eq!(json, "[0.25,1.0]");
    }

    #[test]
    fn series_uses_upper_case_keys() {
        let series: IqSeries = serde_json::from_str(r#"{"I": [1.0], "Q": [-1.0, 0.0]}"#).unwrap();
        assert_eq!(series.i, vec![1.0]);
        assert_eq!(series.q, vec![-1.0, 0.0]);
        assert!(!series.is_empty());
    }

    #[test]
    fn summary_tolerates_missing_fields() {
        let summary: FrameSummary = serde_json::from_str(r#"{"scheme": "BPSK"}"#).unwrap();
        assert_eq!(summary.scheme.as_deref(), Some("BPSK"));
        assert!(summary.snr.is_none());
        assert!(summary.const_clean.is_none());
    }
}
