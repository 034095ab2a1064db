//! Pure decoding core: hex text to bytes, Mode 03 response bytes to
//! trouble codes, and a static description table for common codes.

pub mod config;
pub mod decoder;
pub mod dtc_db;
pub mod error;
pub mod hex;

pub use config::{DecoderConfig, Digit3Style};
pub use decoder::{
    DecodeResult, Decoder, RESPONSE_MARKER, TroubleCode, decode, decode_hex, decode_pair,
};
pub use error::{DtcError, DtcResult, HexError};
