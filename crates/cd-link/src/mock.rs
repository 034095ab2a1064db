//! Mock adapters for testing and demos.
//!
//! `MockScanner` advertises a fixed device list and hands out `MockSession`s
//! that replay scripted responses. No hardware or radio is involved, so the
//! suite runs on any platform.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use cd_protocol::{DeviceHandle, SessionId};

use crate::error::{LinkError, LinkResult};
use crate::types::{AdapterScanner, AdapterSession, RawResponse};

/// Mode 03 reply the simulated adapters answer with.
pub const SAMPLE_DTC_RESPONSE: &str = "43 01 30 31 02 42 30";

/// Mock scanner with a fixed device list and per-device response scripts.
pub struct MockScanner {
    devices: Vec<DeviceHandle>,
    /// Responses each new session to a device starts with (FIFO order).
    scripts: Mutex<HashMap<String, Vec<RawResponse>>>,
    /// Simulated discovery time.
    scan_delay: Duration,
}

impl MockScanner {
    /// Create a scanner that finds nothing.
    pub fn new() -> Self {
        Self::with_devices(Vec::new())
    }

    pub fn with_devices(devices: Vec<DeviceHandle>) -> Self {
        Self {
            devices,
            scripts: Mutex::new(HashMap::new()),
            scan_delay: Duration::ZERO,
        }
    }

    /// Three simulated adapters, each answering Mode 03 with
    /// [`SAMPLE_DTC_RESPONSE`].
    pub fn with_sample_devices() -> Self {
        let scanner = Self::with_devices(vec![
            DeviceHandle::new("1", "OBDII-Sim A"),
            DeviceHandle::new("2", "OBDII-Sim B"),
            DeviceHandle::new("3", "OBDII-Sim C"),
        ]);
        for id in ["1", "2", "3"] {
            scanner.queue_response(id, RawResponse::from(SAMPLE_DTC_RESPONSE));
        }
        scanner
    }

    pub fn with_scan_delay(mut self, delay: Duration) -> Self {
        self.scan_delay = delay;
        self
    }

    /// Append a response to a device's script.
    pub fn queue_response(&self, device_id: &str, response: RawResponse) {
        self.scripts
            .lock()
            .unwrap()
            .entry(device_id.to_string())
            .or_default()
            .push(response);
    }
}

impl Default for MockScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdapterScanner for MockScanner {
    async fn scan(&self, timeout: Duration) -> LinkResult<Vec<DeviceHandle>> {
        if self.scan_delay > timeout {
            tokio::time::sleep(timeout).await;
            return Err(LinkError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            });
        }
        tokio::time::sleep(self.scan_delay).await;
        Ok(self.devices.clone())
    }

    async fn connect(&self, device: &DeviceHandle) -> LinkResult<Box<dyn AdapterSession>> {
        if !self.devices.contains(device) {
            return Err(LinkError::DeviceNotFound {
                id: device.id.clone(),
            });
        }

        let script = self
            .scripts
            .lock()
            .unwrap()
            .get(&device.id)
            .cloned()
            .unwrap_or_default();
        Ok(Box::new(MockSession::with_responses(device.clone(), script)))
    }
}

/// Mock session with scripted responses and request recording.
pub struct MockSession {
    id: SessionId,
    device: DeviceHandle,
    /// Returned by `send_request` in FIFO order.
    responses: Mutex<VecDeque<RawResponse>>,
    /// Every mode that reached the transport (for test assertions).
    sent_modes: Mutex<Vec<u8>>,
}

impl MockSession {
    pub fn new(device: DeviceHandle) -> Self {
        Self::with_responses(device, Vec::new())
    }

    pub fn with_responses(device: DeviceHandle, responses: Vec<RawResponse>) -> Self {
        Self {
            id: SessionId::new(),
            device,
            responses: Mutex::new(responses.into()),
            sent_modes: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_response(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn sent_modes(&self) -> Vec<u8> {
        self.sent_modes.lock().unwrap().clone()
    }
}

#[async_trait]
impl AdapterSession for MockSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn device(&self) -> &DeviceHandle {
        &self.device
    }

    async fn send_request(&self, mode: u8, timeout: Duration) -> LinkResult<RawResponse> {
        self.sent_modes.lock().unwrap().push(mode);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LinkError::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            })
    }
}
