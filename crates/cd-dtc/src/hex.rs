//! Hex text codec for adapter responses.
//!
//! Adapters report responses as text such as `"43 01 30 31 02 42 30"`.
//! `parse` accepts any whitespace layout; `format` emits the canonical
//! separator-free uppercase form.

use crate::error::{DtcResult, HexError};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Parse hex text into bytes, ignoring all whitespace.
///
/// Digits are case-insensitive. Empty (or all-whitespace) input yields an
/// empty vector. `position` in errors is the character index in `text`.
pub fn parse(text: &str) -> DtcResult<Vec<u8>> {
    let mut nibbles = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let nibble = ch
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { ch, position })?;
        nibbles.push(nibble as u8);
    }

    if nibbles.len() % 2 != 0 {
        return Err(HexError::OddLength { len: nibbles.len() }.into());
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Render bytes as two uppercase hex digits each, no separator.
pub fn format(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0F) as usize] as char);
    }
    out
}

/// Render bytes in the adapter's space-separated style (`"43 01 30"`).
pub fn format_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
