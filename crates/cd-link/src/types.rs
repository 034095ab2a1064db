//! Adapter collaborator traits and OBD-II mode constants.

use std::time::Duration;

use async_trait::async_trait;
use cd_dtc::{DtcResult, hex};
use cd_protocol::{DeviceHandle, SessionId};

use crate::error::{LinkError, LinkResult};
use crate::safety;

pub use cd_dtc::decoder::{MODE_STORED_DTCS, RESPONSE_SID_OFFSET};

// ── OBD-II Modes ────────────────────────────────────────────────

/// Mode 01: Show current data (live PIDs).
pub const MODE_CURRENT_DATA: u8 = 0x01;

/// Mode 02: Show freeze frame data.
pub const MODE_FREEZE_FRAME: u8 = 0x02;

/// Mode 09: Request vehicle information (VIN, etc.).
pub const MODE_VEHICLE_INFO: u8 = 0x09;

// ── Raw response ────────────────────────────────────────────────

/// A response as handed over by the transport.
///
/// Text adapters (ELM327 style) answer with hex text; binary transports
/// hand over bytes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawResponse {
    Text(String),
    Bytes(Vec<u8>),
}

impl RawResponse {
    pub fn into_bytes(self) -> DtcResult<Vec<u8>> {
        match self {
            Self::Text(text) => hex::parse(&text),
            Self::Bytes(bytes) => Ok(bytes),
        }
    }
}

impl From<&str> for RawResponse {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for RawResponse {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

// ── Collaborator traits ─────────────────────────────────────────

/// An open connection to one adapter.
#[async_trait]
pub trait AdapterSession: Send + Sync {
    fn id(&self) -> SessionId;

    fn device(&self) -> &DeviceHandle;

    /// Transport hook: send one service request and wait for its response.
    /// Callers go through [`AdapterSession::request`].
    async fn send_request(&self, mode: u8, timeout: Duration) -> LinkResult<RawResponse>;

    /// Send a service request after the read-only mode check.
    async fn request(&self, mode: u8, timeout: Duration) -> LinkResult<RawResponse> {
        if !safety::is_mode_allowed(mode) {
            return Err(LinkError::SafetyViolation { mode });
        }
        self.send_request(mode, timeout).await
    }
}

/// Discovers adapters and opens sessions to them.
#[async_trait]
pub trait AdapterScanner: Send + Sync {
    /// Scan for adapters, giving up after `timeout`.
    async fn scan(&self, timeout: Duration) -> LinkResult<Vec<DeviceHandle>>;

    async fn connect(&self, device: &DeviceHandle) -> LinkResult<Box<dyn AdapterSession>>;
}
