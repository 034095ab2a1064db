//! Mode 03 response decoding.
//!
//! Response layout: `[0x43, hi1, lo1, hi2, lo2, ...]`. Each (hi, lo) pair is
//! one code; a trailing unpaired byte is dropped. A missing or wrong marker
//! byte means "not a DTC response" and yields no codes.

use std::fmt;

use cd_protocol::SystemGroup;
use serde::{Serialize, Serializer};

use crate::config::{DecoderConfig, Digit3Style};
use crate::error::DtcResult;
use crate::hex;

/// Mode 03: Show stored DTCs.
pub const MODE_STORED_DTCS: u8 = 0x03;

/// Offset added to request mode to get response SID.
pub const RESPONSE_SID_OFFSET: u8 = 0x40;

/// Positive-response marker for Mode 03 (0x43).
pub const RESPONSE_MARKER: u8 = MODE_STORED_DTCS + RESPONSE_SID_OFFSET;

/// A decoded trouble code such as `"P0130"`.
///
/// Only the decoder constructs these; the string is always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TroubleCode {
    group: SystemGroup,
    text: String,
}

impl TroubleCode {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn group(&self) -> SystemGroup {
        self.group
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TroubleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for TroubleCode {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for TroubleCode {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for TroubleCode {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl Serialize for TroubleCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Codes in the order the controller reported them. No dedup, no sort.
pub type DecodeResult = Vec<TroubleCode>;

/// Decode one (high, low) byte pair.
///
/// - bits 7–6 of `high`: system group letter
/// - bits 5–4 of `high`: second character, decimal 0–3
/// - bits 3–0 of `high`: third character, per `style`
/// - `low`: last two characters, uppercase hex
pub fn decode_pair(high: u8, low: u8, style: Digit3Style) -> TroubleCode {
    let group = SystemGroup::from_high_byte(high);
    let letter = group.letter();
    let digit2 = (high >> 4) & 0x03;
    let digit3 = high & 0x0F;

    let text = match style {
        Digit3Style::Decimal => format!("{letter}{digit2}{digit3}{low:02X}"),
        Digit3Style::Hex => format!("{letter}{digit2}{digit3:X}{low:02X}"),
    };

    TroubleCode { group, text }
}

/// Stateless Mode 03 decoder carrying its rendering policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode raw response bytes. Total over all inputs.
    pub fn decode(&self, bytes: &[u8]) -> DecodeResult {
        let Some((&marker, payload)) = bytes.split_first() else {
            return Vec::new();
        };
        if marker != RESPONSE_MARKER {
            return Vec::new();
        }

        payload
            .chunks_exact(2)
            .map(|pair| {
                let code = decode_pair(pair[0], pair[1], self.config.digit3);
                tracing::trace!(code = %code, high = pair[0], low = pair[1], "decoded DTC");
                code
            })
            .collect()
    }

    /// Parse hex text, then decode. Fails only on malformed hex.
    pub fn decode_hex(&self, text: &str) -> DtcResult<DecodeResult> {
        let bytes = hex::parse(text)?;
        Ok(self.decode(&bytes))
    }
}

/// Decode with the default policy.
pub fn decode(bytes: &[u8]) -> DecodeResult {
    Decoder::default().decode(bytes)
}

/// Parse hex text and decode with the default policy.
pub fn decode_hex(text: &str) -> DtcResult<DecodeResult> {
    Decoder::default().decode_hex(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DtcError, HexError};
    use proptest::prelude::*;
    use regex::Regex;

    fn hex_decoder() -> Decoder {
        Decoder::new(DecoderConfig {
            digit3: Digit3Style::Hex,
        })
    }

    #[test]
    fn marker_constant() {
        assert_eq!(RESPONSE_MARKER, 0x43);
    }

    // --- Golden vectors ---

    #[test]
    fn decode_adapter_sample_response() {
        let codes = decode_hex("43 01 30 31 02 42 30").unwrap();
        assert_eq!(codes, ["P0130", "P3102", "C0230"]);
        assert_eq!(codes[2].group(), SystemGroup::Chassis);
    }

    #[test]
    fn decode_pair_groups() {
        assert_eq!(decode_pair(0x03, 0x00, Digit3Style::Decimal), "P0300");
        assert_eq!(decode_pair(0x01, 0x71, Digit3Style::Decimal), "P0171");
        assert_eq!(decode_pair(0x40, 0x35, Digit3Style::Decimal), "C0035");
        assert_eq!(decode_pair(0x81, 0x0A, Digit3Style::Decimal), "B010A");
        assert_eq!(decode_pair(0xC1, 0x00, Digit3Style::Decimal), "U0100");
    }

    #[test]
    fn decode_pair_low_byte_is_padded_uppercase_hex() {
        assert_eq!(decode_pair(0x00, 0x0f, Digit3Style::Decimal), "P000F");
        assert_eq!(decode_pair(0x00, 0xAB, Digit3Style::Decimal), "P00AB");
    }

    #[test]
    fn zero_pair_is_still_a_code() {
        assert_eq!(decode(&[0x43, 0x00, 0x00]), ["P0000"]);
    }

    // --- Digit 3 policy ---

    #[test]
    fn decimal_style_widens_values_over_nine() {
        assert_eq!(decode_pair(0x0A, 0x30, Digit3Style::Decimal), "P01030");
        assert_eq!(decode_pair(0xFF, 0xFF, Digit3Style::Decimal), "U315FF");
    }

    #[test]
    fn hex_style_keeps_five_characters() {
        assert_eq!(decode_pair(0x0A, 0x30, Digit3Style::Hex), "P0A30");
        assert_eq!(decode_pair(0xFF, 0xFF, Digit3Style::Hex), "U3FFF");
    }

    #[test]
    fn styles_agree_below_ten() {
        let bytes = [0x43, 0x01, 0x30, 0x31, 0x02, 0x42, 0x30];
        assert_eq!(decode(&bytes), hex_decoder().decode(&bytes));
    }

    // --- Marker and pairing rules ---

    #[test]
    fn empty_input_yields_no_codes() {
        assert!(decode(&[]).is_empty());
        assert!(decode_hex("").unwrap().is_empty());
    }

    #[test]
    fn wrong_marker_yields_no_codes() {
        assert!(decode(&[0x00, 0x01, 0x30]).is_empty());
        assert!(decode(&[0x41, 0x0C, 0x1B, 0x58]).is_empty());
    }

    #[test]
    fn marker_only_yields_no_codes() {
        assert!(decode(&[0x43]).is_empty());
    }

    #[test]
    fn single_pair() {
        assert_eq!(decode(&[0x43, 0x01, 0x30]), ["P0130"]);
    }

    #[test]
    fn lone_data_byte_is_dropped() {
        assert!(decode(&[0x43, 0x01]).is_empty());
    }

    #[test]
    fn trailing_byte_after_pair_is_dropped() {
        assert_eq!(decode(&[0x43, 0x01, 0x30, 0x31]), ["P0130"]);
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let codes = decode(&[0x43, 0x42, 0x30, 0x01, 0x30, 0x42, 0x30]);
        assert_eq!(codes, ["C0230", "P0130", "C0230"]);
    }

    #[test]
    fn decode_hex_surfaces_invalid_hex() {
        let err = decode_hex("43 0G").unwrap_err();
        assert!(matches!(
            err,
            DtcError::InvalidHex(HexError::InvalidDigit { ch: 'G', .. })
        ));
        assert!(matches!(
            decode_hex("43 0"),
            Err(DtcError::InvalidHex(HexError::OddLength { .. }))
        ));
    }

    #[test]
    fn trouble_code_serializes_as_string() {
        let codes = decode(&[0x43, 0x01, 0x30]);
        assert_eq!(serde_json::to_string(&codes).unwrap(), r#"["P0130"]"#);
    }

    #[test]
    fn trouble_code_display() {
        let code = decode_pair(0xC1, 0x00, Digit3Style::Hex);
        assert_eq!(code.to_string(), "U0100");
        assert_eq!(code.clone().into_string(), "U0100");
        assert_eq!(AsRef::<str>::as_ref(&code), "U0100");
    }

    proptest! {
        #[test]
        fn decode_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
            prop_assert_eq!(decode(&bytes), decode(&bytes));
        }

        #[test]
        fn one_code_per_complete_pair(payload in proptest::collection::vec(any::<u8>(), 0..40)) {
            let mut bytes = vec![RESPONSE_MARKER];
            bytes.extend_from_slice(&payload);
            prop_assert_eq!(decode(&bytes).len(), payload.len() / 2);
        }

        #[test]
        fn no_marker_no_codes(
            first in any::<u8>().prop_filter("not the marker", |b| *b != RESPONSE_MARKER),
            rest in proptest::collection::vec(any::<u8>(), 0..20),
        ) {
            let mut bytes = vec![first];
            bytes.extend_from_slice(&rest);
            prop_assert!(decode(&bytes).is_empty());
        }

        #[test]
        fn codes_match_output_grammar(high in any::<u8>(), low in any::<u8>()) {
            let decimal = Regex::new(r"^[PCBU][0-3]([0-9]|1[0-5])[0-9A-F]{2}$").unwrap();
            let sae = Regex::new(r"^[PCBU][0-3][0-9A-F][0-9A-F]{2}$").unwrap();

            let code = decode_pair(high, low, Digit3Style::Decimal);
            prop_assert!(decimal.is_match(code.as_str()), "{}", code);

            let code = decode_pair(high, low, Digit3Style::Hex);
            prop_assert!(sae.is_match(code.as_str()), "{}", code);
            prop_assert_eq!(code.as_str().len(), 5);
        }

        #[test]
        fn decode_hex_agrees_with_decode(payload in proptest::collection::vec(any::<u8>(), 0..20)) {
            let mut bytes = vec![RESPONSE_MARKER];
            bytes.extend_from_slice(&payload);
            prop_assert_eq!(decode_hex(&hex::format_spaced(&bytes)).unwrap(), decode(&bytes));
        }
    }
}
