//! Shared test harness for E2E integration tests.
//!
//! Wires a `DtcReader` to a `MockScanner`, exercising the decoder, code
//! table and link layer together.

#![allow(dead_code)]

use std::time::Duration;

use cd_link::{DtcReader, LinkConfig, MockScanner, RawResponse};
use cd_protocol::DeviceHandle;

/// Adapter whose script is set per test.
pub const SCRIPTED_ID: &str = "scripted";

/// Reader over the three sample adapters plus one scripted adapter.
pub struct TestHarness {
    pub reader: DtcReader<MockScanner>,
}

impl TestHarness {
    pub fn with_sample_devices() -> Self {
        Self::with_config(LinkConfig::default())
    }

    pub fn with_config(config: LinkConfig) -> Self {
        Self {
            reader: DtcReader::new(sample_scanner(), config),
        }
    }

    /// Queue a response for the scripted adapter.
    pub fn script(&self, response: impl Into<RawResponse>) {
        self.reader
            .scanner()
            .queue_response(SCRIPTED_ID, response.into());
    }

    pub fn scripted_device() -> DeviceHandle {
        DeviceHandle::new(SCRIPTED_ID, "OBDII-Scripted")
    }
}

fn sample_scanner() -> MockScanner {
    let mut devices = vec![
        DeviceHandle::new("1", "OBDII-Sim A"),
        DeviceHandle::new("2", "OBDII-Sim B"),
        DeviceHandle::new("3", "OBDII-Sim C"),
    ];
    devices.push(TestHarness::scripted_device());

    let scanner = MockScanner::with_devices(devices).with_scan_delay(Duration::from_millis(10));
    for id in ["1", "2", "3"] {
        scanner.queue_response(id, RawResponse::from(cd_link::mock::SAMPLE_DTC_RESPONSE));
    }
    scanner
}
