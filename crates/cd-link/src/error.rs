//! Adapter link error types.

use cd_dtc::DtcError;
use thiserror::Error;

/// Errors that can occur while talking to an OBD-II adapter.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("device not found: {id}")]
    DeviceNotFound { id: String },

    #[error("Response timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Safety violation: mode 0x{mode:02X} is not allowed")]
    SafetyViolation { mode: u8 },

    #[error("adapter transport error: {0}")]
    Transport(String),

    #[error("response decode error: {0}")]
    Decode(#[from] DtcError),
}

/// Convenience alias for link results.
pub type LinkResult<T> = Result<T, LinkError>;
