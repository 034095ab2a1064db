//! Read-only guard for adapter requests.
//!
//! Allowed OBD-II modes:
//! - 0x01: Show current data (live PIDs)
//! - 0x02: Show freeze frame data
//! - 0x03: Show stored DTCs
//! - 0x09: Request vehicle information (VIN)
//!
//! Mode 0x04 (clear DTCs) and every other mode are refused before the
//! request reaches the session.

use crate::types::{MODE_CURRENT_DATA, MODE_FREEZE_FRAME, MODE_STORED_DTCS, MODE_VEHICLE_INFO};

/// OBD-II modes a session may send.
pub const ALLOWED_MODES: &[u8] = &[
    MODE_CURRENT_DATA,
    MODE_FREEZE_FRAME,
    MODE_STORED_DTCS,
    MODE_VEHICLE_INFO,
];

pub fn is_mode_allowed(mode: u8) -> bool {
    ALLOWED_MODES.contains(&mode)
}
