//! Display formatting for frame telemetry.
//!
//! Missing or non-finite numbers never fail a render; they show
//! [`PLACEHOLDER`].

/// Shown in place of a missing numeric value.
pub const PLACEHOLDER: &str = "—";

/// Characters of ciphertext shown before truncation.
pub const CIPHER_PREVIEW_CHARS: usize = 260;

/// Truncate an encoded ciphertext for display.
///
/// Text longer than [`CIPHER_PREVIEW_CHARS`] keeps its head followed by an
/// ellipsis and the total character count.
pub fn truncate_cipher(text: &str) -> String {
    let total = text.chars().count();
    if total <= CIPHER_PREVIEW_CHARS {
        return text.to_owned();
    }
    let head: String = text.chars().take(CIPHER_PREVIEW_CHARS).collect();
    format!("{head} … ({total} chars)")
}

/// Bit-error rate in exponential notation with two fractional digits.
///
/// The exponent is always signed: `3.40e-4`, `1.00e+0`.
pub fn format_ber(ber: Option<f64>) -> String {
    match ber.filter(|b| b.is_finite()) {
        Some(ber) => {
            let text = format!("{ber:.2e}");
            if text.contains("e-") { text } else { text.replacen('e', "e+", 1) }
        },
        None => PLACEHOLDER.to_owned(),
    }
}

/// SNR with one decimal.
pub fn format_snr(snr: Option<f64>) -> String {
    match snr.filter(|s| s.is_finite()) {
        Some(snr) => format!("{snr:.1}"),
        None => PLACEHOLDER.to_owned(),
    }
}

/// Shortest decimal form of a number (`12`, `8.5`).
pub fn format_number(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(value) => value.to_string(),
        None => PLACEHOLDER.to_owned(),
    }
}

/// SNR readout in decibels (`12 dB`).
pub fn format_db(snr: f64) -> String {
    format!("{} dB", format_number(Some(snr)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ber_scientific() {
        insta::assert_snapshot!(format_ber(Some(0.00034)), @"3.40e-4");
        insta::assert_snapshot!(format_ber(Some(0.02)), @"2.00e-2");
        insta::assert_snapshot!(format_ber(Some(1.0)), @"1.00e+0");
        insta::assert_snapshot!(format_ber(Some(0.0)), @"0.00e+0");
    }

    #[test]
    fn ber_missing_is_placeholder() {
        assert_eq!(format_ber(None), PLACEHOLDER);
        assert_eq!(format_ber(Some(f64::NAN)), PLACEHOLDER);
    }

    #[test]
    fn snr_one_decimal() {
        assert_eq!(format_snr(Some(8.0)), "8.0");
        assert_eq!(format_snr(Some(12.345)), "12.3");
        assert_eq!(format_snr(None), PLACEHOLDER);
    }

    #[test]
    fn db_drops_integral_fraction() {
        assert_eq!(format_db(12.0), "12 dB");
        assert_eq!(format_db(8.5), "8.5 dB");
        assert_eq!(format_db(-3.0), "-3 dB");
    }

    #[test]
    fn short_cipher_unchanged() {
        let text = "A".repeat(CIPHER_PREVIEW_CHARS);
        assert_eq!(truncate_cipher(&text), text);
        assert_eq!(truncate_cipher(""), "");
    }

    #[test]
    fn long_cipher_truncated_with_length() {
        let text = "B".repeat(CIPHER_PREVIEW_CHARS + 1);
        let preview = truncate_cipher(&text);
        assert_eq!(preview, format!("{} … (261 chars)", "B".repeat(CIPHER_PREVIEW_CHARS)));
    }
}
