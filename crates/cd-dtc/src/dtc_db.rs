//! Static DTC description table for common SAE generic codes.
//!
//! Entries are kept sorted by code so lookup is a binary search.

use cd_protocol::DtcSeverity;
use cd_protocol::DtcSeverity::{Critical, Info, Warning};

/// DTC entry from the static database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DtcEntry {
    pub description: &'static str,
    pub severity: DtcSeverity,
}

const TABLE: &[(&str, &str, DtcSeverity)] = &[
    ("B0001", "Driver Frontal Stage 1 Deployment Control", Critical),
    ("B0100", "Electronic Frontal Sensor 1", Critical),
    ("C0035", "Left Front Wheel Speed Sensor Circuit", Warning),
    ("C0040", "Right Front Wheel Speed Sensor Circuit", Warning),
    ("C0045", "Left Rear Wheel Speed Sensor Circuit", Warning),
    ("C0050", "Right Rear Wheel Speed Sensor Circuit", Warning),
    ("P0100", "Mass or Volume Air Flow Circuit Malfunction", Warning),
    ("P0101", "Mass or Volume Air Flow Circuit Range/Performance", Warning),
    ("P0110", "Intake Air Temperature Circuit Malfunction", Warning),
    ("P0115", "Engine Coolant Temperature Circuit Malfunction", Warning),
    ("P0120", "Throttle Position Sensor Circuit Malfunction", Warning),
    ("P0128", "Coolant Thermostat Below Regulating Temperature", Info),
    ("P0130", "O2 Sensor Circuit Malfunction (Bank 1 Sensor 1)", Warning),
    ("P0131", "O2 Sensor Circuit Low Voltage (Bank 1 Sensor 1)", Warning),
    ("P0132", "O2 Sensor Circuit High Voltage (Bank 1 Sensor 1)", Warning),
    ("P0133", "O2 Sensor Circuit Slow Response (Bank 1 Sensor 1)", Warning),
    ("P0171", "System Too Lean (Bank 1)", Warning),
    ("P0172", "System Too Rich (Bank 1)", Warning),
    ("P0174", "System Too Lean (Bank 2)", Warning),
    ("P0175", "System Too Rich (Bank 2)", Warning),
    ("P0217", "Engine Overtemperature Condition", Critical),
    ("P0300", "Random/Multiple Cylinder Misfire Detected", Critical),
    ("P0301", "Cylinder 1 Misfire Detected", Critical),
    ("P0302", "Cylinder 2 Misfire Detected", Critical),
    ("P0303", "Cylinder 3 Misfire Detected", Critical),
    ("P0304", "Cylinder 4 Misfire Detected", Critical),
    ("P0325", "Knock Sensor 1 Circuit Malfunction (Bank 1)", Warning),
    ("P0335", "Crankshaft Position Sensor A Circuit Malfunction", Critical),
    ("P0340", "Camshaft Position Sensor Circuit Malfunction", Warning),
    ("P0401", "Exhaust Gas Recirculation Flow Insufficient", Warning),
    ("P0420", "Catalyst System Efficiency Below Threshold (Bank 1)", Warning),
    ("P0430", "Catalyst System Efficiency Below Threshold (Bank 2)", Warning),
    ("P0440", "Evaporative Emission Control System Malfunction", Info),
    ("P0442", "Evaporative Emission System Leak Detected (Small Leak)", Info),
    ("P0455", "Evaporative Emission System Leak Detected (Large Leak)", Info),
    ("P0500", "Vehicle Speed Sensor Malfunction", Warning),
    ("P0505", "Idle Control System Malfunction", Warning),
    ("P0562", "System Voltage Low", Warning),
    ("P0700", "Transmission Control System Malfunction", Warning),
    ("U0001", "High Speed CAN Communication Bus", Critical),
    ("U0100", "Lost Communication With ECM/PCM A", Critical),
    ("U0121", "Lost Communication With Anti-Lock Brake System Module", Critical),
    ("U0140", "Lost Communication With Body Control Module", Warning),
];

/// Look up a DTC code in the static database.
/// Input is case-insensitive (normalized to uppercase internally).
pub fn lookup(code: &str) -> Option<DtcEntry> {
    let code = code.to_ascii_uppercase();
    TABLE
        .binary_search_by(|(entry, _, _)| (*entry).cmp(code.as_str()))
        .ok()
        .map(|i| {
            let (_, description, severity) = TABLE[i];
            DtcEntry {
                description,
                severity,
            }
        })
}

/// Number of codes in the table.
pub fn len() -> usize {
    TABLE.len()
}
