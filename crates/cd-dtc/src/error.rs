//! Decoder error types.

use thiserror::Error;

/// Why a hex string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("odd number of hex digits ({len})")]
    OddLength { len: usize },

    #[error("invalid hex digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },
}

/// Errors surfaced by the decoding core.
///
/// Byte-level decoding is total; only hex text can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DtcError {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] HexError),
}

/// Convenience alias for decoder results.
pub type DtcResult<T> = Result<T, DtcError>;
