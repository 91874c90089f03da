//! Property-based and fixture tests for envelope decoding.
//!
//! Fixtures mirror what the relay server actually emits, including fields
//! this client does not read, so decoding stays tolerant of extra keys.

use linkscope_proto::{Inbound, IqPoint, PayloadKind, ProtocolError, codec};
use proptest::prelude::*;
use serde_json::json;

fn server_frame(kind: &str) -> serde_json::Value {
    json!({
        "type": kind,
        "kind": "file",
        "name": "notes.txt",
        "scheme": "QPSK",
        "snr": 8.0,
        "ber": 0.00034,
        "fec": "rep3",
        "iv": "AAAAAAAAAAAAAAAA",
        "salt": "c2FsdHNhbHQ=",
        "cipher_raw": "cmF3",
        "cipher_clean": "Y2xlYW4=",
        "cipher": "bm9pc3k=",
        "const_clean": [[0.707, 0.707], [-0.707, 0.707]],
        "const_noisy": [[0.69, 0.74], [-0.71, 0.66]],
        "bits_raw": "01100001 01100010",
        "bits_clean": "01100001",
        "bits_noisy": "01100011",
        "wave_clean": {"I": [0.707, -0.707], "Q": [0.707, 0.707]},
        "wave_noisy": {"I": [0.69, -0.71], "Q": [0.74, 0.66]},
        "bits_plot_raw": [0, 1, 1, 0],
        "bits_plot_clean": [0, 1, 1, 0],
        "bits_plot_noisy": [0, 1, 1, 1]
    })
}

#[test]
fn decodes_server_frame_rx() {
    let text = server_frame("frame_rx").to_string();
    let Inbound::FrameRx(frame) = Inbound::decode(&text).unwrap() else {
        panic!("expected frame_rx");
    };

    assert_eq!(frame.kind, PayloadKind::File);
    assert_eq!(frame.name.as_deref(), Some("notes.txt"));
    assert_eq!(frame.summary.cipher.as_deref(), Some("bm9pc3k="));
    assert_eq!(frame.summary.fec.as_deref(), Some("rep3"));
    assert_eq!(
        frame.summary.const_clean.as_deref(),
        Some(&[IqPoint::new(0.707, 0.707), IqPoint::new(-0.707, 0.707)][..])
    );
}

#[test]
fn decodes_server_frame_preview() {
    let text = server_frame("frame_preview").to_string();
    let Inbound::FramePreview(preview) = Inbound::decode(&text).unwrap() else {
        panic!("expected frame_preview");
    };

    assert_eq!(preview.summary.scheme.as_deref(), Some("QPSK"));
    assert_eq!(preview.wave_noisy.map(|w| w.q.len()), Some(2));
    assert_eq!(preview.bits_plot_noisy, Some(vec![0, 1, 1, 1]));
}

#[test]
fn frame_rx_with_null_fec_decodes() {
    let mut value = server_frame("frame_rx");
    value["fec"] = serde_json::Value::Null;
    value["ber"] = json!(0.02);

    let Inbound::FrameRx(frame) = Inbound::decode(&value.to_string()).unwrap() else {
        panic!("expected frame_rx");
    };
    assert!(frame.summary.fec.is_none());
    assert_eq!(frame.summary.ber, Some(0.02));
}

#[test]
fn frame_rx_without_crypto_parameters_is_malformed() {
    let mut value = server_frame("frame_rx");
    if let Some(map) = value.as_object_mut() {
        map.remove("iv");
    }
    assert!(matches!(Inbound::decode(&value.to_string()), Err(ProtocolError::Malformed(_))));
}

#[test]
fn rx_result_failure_has_no_payload() {
    let Inbound::RxResult(result) = Inbound::decode(r#"{"type":"rx_result","ok":false}"#).unwrap()
    else {
        panic!("expected rx_result");
    };
    assert!(!result.ok);
    assert!(result.kind.is_none());
    assert!(result.file_b64.is_none());
}

proptest! {
    /// A file of N bytes survives the trip to text and back with N bytes.
    #[test]
    fn prop_codec_preserves_length(bytes in prop::collection::vec(any::<u8>(), 0..4096)) {
        let text = codec::encode(&bytes);
        prop_assert!(text.is_ascii());
        let decoded = codec::decode(&text).unwrap();
        prop_assert_eq!(decoded.len(), bytes.len());
        prop_assert_eq!(decoded, bytes);
    }

    /// Arbitrary text never panics the decoder.
    #[test]
    fn prop_decode_never_panics(text in ".{0,256}") {
        let _ = Inbound::decode(&text);
    }

    /// Unknown tags are reported as such, never as another variant.
    #[test]
    fn prop_unknown_tags_rejected(tag in "[a-z_]{1,16}") {
        prop_assume!(!linkscope_proto::envelope::INBOUND_TYPES.contains(&tag.as_str()));
        let text = json!({"type": tag}).to_string();
        let is_unknown = matches!(Inbound::decode(&text), Err(ProtocolError::UnknownType(_)));
        prop_assert!(is_unknown);
    }
}
