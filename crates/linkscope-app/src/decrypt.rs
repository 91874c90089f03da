//! Decrypt round-trip coordination.
//!
//! Every received frame spawns exactly one `rx_decrypt` request. The relay
//! answers with `rx_result` envelopes that carry no correlation id, so
//! results are matched to requests in arrival order.

use std::collections::VecDeque;

use linkscope_proto::{DecryptRequest, FrameRx, PayloadKind, RxResult, codec};

use crate::Download;

/// Name offered for a decrypted file when the frame carried none.
pub const DEFAULT_DOWNLOAD_NAME: &str = "received.bin";

/// Requests remembered while awaiting results. Older entries are dropped.
const MAX_PENDING: usize = 64;

/// Interpretation of one `rx_result`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecryptOutcome {
    /// Authentication failed; no payload is exposed.
    AuthFailed,
    /// Decrypted text.
    Text(String),
    /// Decrypted file, ready to save.
    File(Download),
    /// File payload was not valid base64.
    CorruptFile,
    /// Success without a recognizable payload kind.
    Unrecognized,
}

#[derive(Debug, Clone)]
struct PendingDecrypt {
    kind: PayloadKind,
    name: Option<String>,
}

/// Builds decrypt requests and matches results to them.
#[derive(Debug, Clone, Default)]
pub struct DecryptCoordinator {
    pending: VecDeque<PendingDecrypt>,
}

impl DecryptCoordinator {
    /// Create a coordinator with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the decrypt request for a received frame.
    ///
    /// Always uses the noisy ciphertext and the password given at this
    /// moment. A frame without ciphertext still produces a request so the
    /// relay answers with an authentication failure.
    pub fn request(&mut self, frame: &FrameRx, password: &str) -> DecryptRequest {
        if self.pending.len() == MAX_PENDING {
            tracing::warn!("dropping oldest unanswered decrypt request");
            self.pending.pop_front();
        }
        self.pending.push_back(PendingDecrypt { kind: frame.kind, name: frame.name.clone() });

        DecryptRequest {
            password: password.to_owned(),
            kind: frame.kind,
            iv: frame.iv.clone(),
            salt: frame.salt.clone(),
            cipher: frame.summary.cipher.clone().unwrap_or_default(),
            fec: frame.summary.fec.clone(),
        }
    }

    /// Match a result to the oldest pending request and interpret it.
    ///
    /// A result that arrives with nothing pending is still interpreted.
    pub fn resolve(&mut self, result: RxResult) -> DecryptOutcome {
        let pending = self.pending.pop_front();
        if pending.is_none() {
            tracing::debug!("rx_result without a pending request");
        }

        if !result.ok {
            return DecryptOutcome::AuthFailed;
        }

        match result.kind.or(pending.as_ref().map(|p| p.kind)) {
            Some(PayloadKind::Text) => DecryptOutcome::Text(result.text.unwrap_or_default()),
            Some(PayloadKind::File) => {
                let Some(encoded) = result.file_b64 else {
                    return DecryptOutcome::CorruptFile;
                };
                match codec::decode(&encoded) {
                    Ok(bytes) => {
                        let name = pending
                            .and_then(|p| p.name)
                            .filter(|name| !name.is_empty())
                            .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_owned());
                        DecryptOutcome::File(Download { name, bytes })
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "decrypted file payload is not base64");
                        DecryptOutcome::CorruptFile
                    },
                }
            },
            None => DecryptOutcome::Unrecognized,
        }
    }

    /// Forget every pending request.
    ///
    /// Results for requests sent on a socket that has gone away never
    /// arrive, so the queue starts over with each session.
    pub fn reset(&mut self) {
        if !self.pending.is_empty() {
            tracing::debug!(dropped = self.pending.len(), "discarding unanswered decrypt requests");
        }
        self.pending.clear();
    }

    /// Number of requests awaiting a result.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use linkscope_proto::FrameSummary;

    use super::*;

    fn frame(kind: PayloadKind, name: Option<&str>) -> FrameRx {
        FrameRx {
            summary: FrameSummary {
                cipher_raw: Some("RAW".into()),
                cipher_clean: Some("CLEAN".into()),
                cipher: Some("NOISY".into()),
                fec: Some("hamming74".into()),
                ..Default::default()
            },
            kind,
            iv: "IV".into(),
            salt: "SALT".into(),
            name: name.map(str::to_owned),
        }
    }

    #[test]
    fn request_uses_noisy_cipher_and_given_password() {
        let mut coordinator = DecryptCoordinator::new();
        let request = coordinator.request(&frame(PayloadKind::Text, None), "pw1");

        assert_eq!(request, DecryptRequest {
            password: "pw1".into(),
            kind: PayloadKind::Text,
            iv: "IV".into(),
            salt: "SALT".into(),
            cipher: "NOISY".into(),
            fec: Some("hamming74".into()),
        });
        assert_eq!(coordinator.pending(), 1);
    }

    #[test]
    fn auth_failure_exposes_nothing() {
        let mut coordinator = DecryptCoordinator::new();
        coordinator.request(&frame(PayloadKind::File, Some("a.txt")), "");

        let outcome = coordinator.resolve(RxResult {
            ok: false,
            file_b64: Some("aGk=".into()),
            ..Default::default()
        });
        assert_eq!(outcome, DecryptOutcome::AuthFailed);
        assert_eq!(coordinator.pending(), 0);
    }

    #[test]
    fn results_match_requests_in_order() {
        let mut coordinator = DecryptCoordinator::new();
        coordinator.request(&frame(PayloadKind::File, Some("first.bin")), "");
        coordinator.request(&frame(PayloadKind::File, Some("second.bin")), "");

        let ok = |b64: &str| RxResult {
            ok: true,
            kind: Some(PayloadKind::File),
            file_b64: Some(b64.into()),
            ..Default::default()
        };

        let DecryptOutcome::File(first) = coordinator.resolve(ok("AAE=")) else {
            panic!("expected file");
        };
        let DecryptOutcome::File(second) = coordinator.resolve(ok("AgM=")) else {
            panic!("expected file");
        };
        assert_eq!(first, Download { name: "first.bin".into(), bytes: vec![0, 1] });
        assert_eq!(second, Download { name: "second.bin".into(), bytes: vec![2, 3] });
    }

    #[test]
    fn unmatched_file_gets_default_name() {
        let mut coordinator = DecryptCoordinator::new();
        let outcome = coordinator.resolve(RxResult {
            ok: true,
            kind: Some(PayloadKind::File),
            file_b64: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(
            outcome,
            DecryptOutcome::File(Download { name: DEFAULT_DOWNLOAD_NAME.into(), bytes: vec![] })
        );
    }

    #[test]
    fn corrupt_file_payload() {
        let mut coordinator = DecryptCoordinator::new();
        let outcome = coordinator.resolve(RxResult {
            ok: true,
            kind: Some(PayloadKind::File),
            file_b64: Some("@@@".into()),
            ..Default::default()
        });
        assert_eq!(outcome, DecryptOutcome::CorruptFile);
    }

    #[test]
    fn text_result() {
        let mut coordinator = DecryptCoordinator::new();
        coordinator.request(&frame(PayloadKind::Text, None), "pw");
        let outcome = coordinator.resolve(RxResult {
            ok: true,
            kind: Some(PayloadKind::Text),
            text: Some("hello".into()),
            ..Default::default()
        });
        assert_eq!(outcome, DecryptOutcome::Text("hello".into()));
    }

    #[test]
    fn pending_queue_is_bounded() {
        let mut coordinator = DecryptCoordinator::new();
        for _ in 0..MAX_PENDING + 10 {
            coordinator.request(&frame(PayloadKind::Text, None), "");
        }
        assert_eq!(coordinator.pending(), MAX_PENDING);
    }

    #[test]
    fn reset_forgets_pending_names() {
        let mut coordinator = DecryptCoordinator::new();
        coordinator.request(&frame(PayloadKind::File, Some("stale.bin")), "");
        coordinator.reset();
        coordinator.request(&frame(PayloadKind::File, Some("fresh.bin")), "");

        let outcome = coordinator.resolve(RxResult {
            ok: true,
            kind: Some(PayloadKind::File),
            file_b64: Some("AAE=".into()),
            ..Default::default()
        });
        assert_eq!(outcome, DecryptOutcome::File(Download { name: "fresh.bin".into(), bytes: vec![0, 1] }));
        assert_eq!(coordinator.pending(), 0);
    }
}
