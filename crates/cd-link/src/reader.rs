//! DTC reader service: scan, connect, request Mode 03, decode, describe.
//!
//! The reader owns its scanner; there is no process-wide instance.

use cd_dtc::{Decoder, RESPONSE_MARKER, TroubleCode, dtc_db, hex};
use cd_protocol::{DeviceHandle, DtcRecord, DtcReport, DtcSeverity};
use chrono::Utc;

use crate::config::LinkConfig;
use crate::error::{LinkError, LinkResult};
use crate::types::{AdapterScanner, AdapterSession, MODE_STORED_DTCS};

/// Reads stored trouble codes through an injected adapter scanner.
pub struct DtcReader<S> {
    scanner: S,
    config: LinkConfig,
    decoder: Decoder,
}

impl<S: AdapterScanner> DtcReader<S> {
    pub fn new(scanner: S, config: LinkConfig) -> Self {
        let decoder = Decoder::new(config.decoder);
        Self {
            scanner,
            config,
            decoder,
        }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Scan for adapters using the configured timeout.
    pub async fn scan(&self) -> LinkResult<Vec<DeviceHandle>> {
        let devices = self.scanner.scan(self.config.scan_timeout()).await?;
        tracing::info!(device_count = devices.len(), "adapter scan complete");
        Ok(devices)
    }

    pub async fn connect(&self, device: &DeviceHandle) -> LinkResult<Box<dyn AdapterSession>> {
        let session = self.scanner.connect(device).await?;
        tracing::info!(device = %device, session = %session.id(), "adapter connected");
        Ok(session)
    }

    /// Request stored DTCs over `session` and decode the reply.
    ///
    /// A reply without the 0x43 marker is reported as "no codes", not as an
    /// error. Malformed hex text fails with [`LinkError::Decode`].
    pub async fn read_codes(&self, session: &dyn AdapterSession) -> LinkResult<DtcReport> {
        let raw = session
            .request(MODE_STORED_DTCS, self.config.request_timeout())
            .await?;
        let bytes = raw.into_bytes()?;

        tracing::debug!(
            session = %session.id(),
            raw = %hex::format_spaced(&bytes),
            "mode 03 response"
        );

        if bytes.first() != Some(&RESPONSE_MARKER) {
            tracing::warn!(
                session = %session.id(),
                len = bytes.len(),
                "response is not a mode 03 reply, reporting no codes"
            );
        }

        let codes: Vec<DtcRecord> = self
            .decoder
            .decode(&bytes)
            .into_iter()
            .map(|code| self.to_record(code))
            .collect();

        tracing::info!(
            device = %session.device(),
            code_count = codes.len(),
            "read stored DTCs"
        );

        Ok(DtcReport {
            session_id: session.id(),
            device: session.device().clone(),
            raw_hex: hex::format(&bytes),
            codes,
            read_at: Utc::now(),
        })
    }

    /// Scan, pick the device with `device_id`, connect and read.
    pub async fn scan_and_read(&self, device_id: &str) -> LinkResult<DtcReport> {
        let devices = self.scan().await?;
        let device = devices
            .into_iter()
            .find(|d| d.id == device_id)
            .ok_or_else(|| LinkError::DeviceNotFound {
                id: device_id.to_string(),
            })?;

        let session = self.connect(&device).await?;
        self.read_codes(&*session).await
    }

    fn to_record(&self, code: TroubleCode) -> DtcRecord {
        let entry = if self.config.describe_codes {
            dtc_db::lookup(code.as_str())
        } else {
            None
        };

        DtcRecord {
            group: code.group(),
            severity: entry.map_or(DtcSeverity::Unknown, |e| e.severity),
            description: entry.map(|e| e.description.to_string()),
            code: code.into_string(),
        }
    }
}
