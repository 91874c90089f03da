//! Inbound envelope dispatch.
//!
//! Each [`Inbound`] variant updates a fixed part of the view model. The match
//! is closed: adding an envelope type fails to compile until it is handled
//! here.

use linkscope_proto::{FramePreview, FrameRx, Inbound, Outbound, RxResult};
use linkscope_render::{draw_bit_chart, draw_constellation, draw_waveform};

use crate::{
    App, AppAction, DecryptOutcome, PlotSlot, PreviewPanel,
    format::{format_ber, format_db, format_number},
};

impl App {
    /// Apply an inbound envelope.
    pub(crate) fn dispatch(&mut self, inbound: Inbound) -> Vec<AppAction> {
        match inbound {
            Inbound::Joined { room, role, snr } => {
                if let Some(snr) = snr {
                    self.snr_display = format_db(snr);
                }
                self.log.push(format!("Joined room {room} as {role}"));
                vec![AppAction::Render]
            },
            Inbound::SnrUpdate { snr } => {
                self.snr_display = format_db(snr);
                self.log.push(format!("SNR update: {}", format_db(snr)));
                vec![AppAction::Render]
            },
            Inbound::TxAck { info } => {
                self.log.push(info);
                vec![AppAction::Render]
            },
            Inbound::PeerStatus { status } => {
                self.log.push(format!("Peer {status}"));
                vec![AppAction::Render]
            },
            Inbound::FrameRx(frame) => self.on_frame_rx(&frame),
            Inbound::FramePreview(preview) => self.on_frame_preview(&preview),
            Inbound::RxResult(result) => self.on_rx_result(result),
        }
    }

    fn on_frame_rx(&mut self, frame: &FrameRx) -> Vec<AppAction> {
        let summary = &frame.summary;
        self.rx_preview = PreviewPanel::from_summary(summary);

        let scheme = summary.scheme.as_deref();
        draw_constellation(self.plots.get_mut(PlotSlot::RxConstClean), summary.const_clean.as_deref(), scheme);
        draw_constellation(self.plots.get_mut(PlotSlot::RxConstNoisy), summary.const_noisy.as_deref(), scheme);

        self.log.push(format!(
            "RX frame via {} @SNR={}dB (BER~{})",
            scheme.unwrap_or("-"),
            format_number(summary.snr),
            format_ber(summary.ber),
        ));

        let request = self.decrypt.request(frame, &self.password);
        vec![AppAction::Send(Outbound::RxDecrypt(request)), AppAction::Render]
    }

    fn on_frame_preview(&mut self, preview: &FramePreview) -> Vec<AppAction> {
        let summary = &preview.summary;
        self.tx_preview = PreviewPanel::from_summary(summary);

        let scheme = summary.scheme.as_deref();
        draw_constellation(self.plots.get_mut(PlotSlot::TxConstClean), summary.const_clean.as_deref(), scheme);
        draw_constellation(self.plots.get_mut(PlotSlot::TxConstNoisy), summary.const_noisy.as_deref(), scheme);
        draw_waveform(self.plots.get_mut(PlotSlot::TxWaveClean), preview.wave_clean.as_ref());
        draw_waveform(self.plots.get_mut(PlotSlot::TxWaveNoisy), preview.wave_noisy.as_ref());
        draw_bit_chart(
            self.plots.get_mut(PlotSlot::TxBits),
            preview.bits_plot_raw.as_deref(),
            preview.bits_plot_clean.as_deref(),
            preview.bits_plot_noisy.as_deref(),
        );

        vec![AppAction::Render]
    }

    fn on_rx_result(&mut self, result: RxResult) -> Vec<AppAction> {
        match self.decrypt.resolve(result) {
            DecryptOutcome::AuthFailed => self.log.push("Decrypt: AUTH FAIL (too noisy?)"),
            DecryptOutcome::Text(text) => self.log.push(format!("Decrypt: TEXT -> {text}")),
            DecryptOutcome::File(download) => {
                tracing::info!(name = %download.name, bytes = download.bytes.len(), "file decrypted");
                self.downloads.insert(0, download);
                self.log.push("Decrypt: FILE ready to download");
            },
            DecryptOutcome::CorruptFile => self.log.push("Decrypt: FILE payload is corrupt"),
            DecryptOutcome::Unrecognized => {
                tracing::debug!("rx_result without a payload kind");
                return vec![];
            },
        }
        vec![AppAction::Render]
    }
}

#[cfg(test)]
mod tests {
    use linkscope_proto::{FrameSummary, IqPoint, IqSeries, PayloadKind, Role};

    use super::*;
    use crate::AppEvent;

    fn received(fec: Option<&str>) -> Inbound {
        Inbound::FrameRx(FrameRx {
            summary: FrameSummary {
                scheme: Some("QPSK".into()),
                snr: Some(8.0),
                ber: Some(0.02),
                fec: fec.map(str::to_owned),
                cipher_raw: Some("RAW".into()),
                cipher_clean: Some("CLEAN".into()),
                cipher: Some("NOISY".into()),
                const_clean: Some(vec![IqPoint::new(0.7, 0.7)]),
                const_noisy: Some(vec![IqPoint::new(0.6, 0.9)]),
                ..Default::default()
            },
            kind: PayloadKind::Text,
            iv: "IV".into(),
            salt: "SALT".into(),
            name: None,
        })
    }

    #[test]
    fn joined_sets_readout_and_logs() {
        let mut app = App::new(Role::Sender);
        app.handle(AppEvent::Inbound(Inbound::Joined {
            room: "A".into(),
            role: Role::Sender,
            snr: Some(12.0),
        }));

        assert_eq!(app.snr_display(), "12 dB");
        assert_eq!(app.log_panel().latest(), Some("Joined room A as tx"));
    }

    #[test]
    fn snr_update_logs() {
        let mut app = App::new(Role::Receiver);
        app.handle(AppEvent::Inbound(Inbound::SnrUpdate { snr: 4.5 }));
        assert_eq!(app.snr_display(), "4.5 dB");
        assert_eq!(app.log_panel().latest(), Some("SNR update: 4.5 dB"));
    }

    #[test]
    fn peer_status_logs() {
        let mut app = App::new(Role::Receiver);
        app.handle(AppEvent::Inbound(Inbound::PeerStatus { status: "tx joined".into() }));
        assert_eq!(app.log_panel().latest(), Some("Peer tx joined"));
    }

    #[test]
    fn frame_rx_fills_preview_and_requests_decrypt() {
        let mut app = App::new(Role::Receiver);
        app.set_password("secret");
        let actions = app.handle(AppEvent::Inbound(received(None)));

        let [AppAction::Send(Outbound::RxDecrypt(request)), AppAction::Render] = actions.as_slice() else {
            panic!("unexpected actions: {actions:?}");
        };
        assert_eq!(request.cipher, "NOISY");
        assert_eq!(request.password, "secret");
        assert_eq!(request.fec, None);

        assert_eq!(app.rx_preview().fec, "FEC: none");
        assert_eq!(app.rx_preview().ber, "BER: 2.00e-2");
        assert_eq!(app.log_panel().latest(), Some("RX frame via QPSK @SNR=8dB (BER~2.00e-2)"));
        assert!(!app.plots().get(PlotSlot::RxConstNoisy).is_empty());
        assert_eq!(app.pending_decrypts(), 1);
    }

    #[test]
    fn frame_preview_draws_sender_plots() {
        let mut app = App::new(Role::Sender);
        let preview = FramePreview {
            wave_clean: Some(IqSeries { i: vec![0.0, 1.0], q: vec![1.0, 0.0] }),
            bits_plot_raw: Some(vec![1, 0, 1]),
            ..Default::default()
        };
        let actions = app.handle(AppEvent::Inbound(Inbound::FramePreview(preview)));

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(!app.plots().get(PlotSlot::TxWaveClean).is_empty());
        assert!(!app.plots().get(PlotSlot::TxBits).is_empty());
        // No point lists: constellations stay untouched.
        assert!(app.plots().get(PlotSlot::TxConstClean).is_empty());
    }

    #[test]
    fn auth_failure_creates_no_download() {
        let mut app = App::new(Role::Receiver);
        app.handle(AppEvent::Inbound(received(Some("rep3"))));
        app.handle(AppEvent::Inbound(Inbound::RxResult(RxResult { ok: false, ..Default::default() })));

        assert_eq!(app.log_panel().latest(), Some("Decrypt: AUTH FAIL (too noisy?)"));
        assert!(app.downloads().is_empty());
    }

    #[test]
    fn corrupt_file_is_logged() {
        let mut app = App::new(Role::Receiver);
        app.handle(AppEvent::Inbound(Inbound::RxResult(RxResult {
            ok: true,
            kind: Some(PayloadKind::File),
            file_b64: Some("!!".into()),
            ..Default::default()
        })));

        assert_eq!(app.log_panel().latest(), Some("Decrypt: FILE payload is corrupt"));
        assert!(app.downloads().is_empty());
    }
}
