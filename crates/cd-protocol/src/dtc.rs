use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::{DeviceHandle, SessionId};

/// System group of a DTC, encoded in the top two bits of the high byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemGroup {
    /// P: Powertrain (engine, transmission).
    Powertrain,
    /// C: Chassis (ABS, steering).
    Chassis,
    /// B: Body (airbags, AC, lighting).
    Body,
    /// U: Network/Communication (CAN bus errors).
    Network,
}

impl SystemGroup {
    /// Select the group from bits 7–6 of a DTC high byte.
    pub fn from_high_byte(high: u8) -> Self {
        match high >> 6 {
            0 => Self::Powertrain,
            1 => Self::Chassis,
            2 => Self::Body,
            _ => Self::Network,
        }
    }

    /// Leading letter used in the code string.
    pub fn letter(self) -> char {
        match self {
            Self::Powertrain => 'P',
            Self::Chassis => 'C',
            Self::Body => 'B',
            Self::Network => 'U',
        }
    }

    /// Parse a group letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(Self::Powertrain),
            'C' => Some(Self::Chassis),
            'B' => Some(Self::Body),
            'U' => Some(Self::Network),
            _ => None,
        }
    }
}

/// Severity classification of a DTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtcSeverity {
    /// Informational: no immediate action needed.
    Info,
    /// Warning: schedule maintenance.
    Warning,
    /// Critical: immediate attention required.
    Critical,
    /// Unknown: severity not in database.
    Unknown,
}

/// A decoded trouble code, optionally enriched from the description database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtcRecord {
    /// Code string as produced by the decoder (e.g., "P0130").
    pub code: String,
    pub group: SystemGroup,
    pub severity: DtcSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Outcome of one Mode 03 read against a connected adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtcReport {
    pub session_id: SessionId,
    pub device: DeviceHandle,
    /// Raw response in canonical hex, kept for audit/logging.
    pub raw_hex: String,
    /// Codes in the order the controller reported them.
    pub codes: Vec<DtcRecord>,
    pub read_at: DateTime<Utc>,
}

impl DtcReport {
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Code strings only, in report order.
    pub fn code_strings(&self) -> Vec<&str> {
        self.codes.iter().map(|c| c.code.as_str()).collect()
    }
}
