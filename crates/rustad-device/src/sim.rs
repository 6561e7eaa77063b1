//! Lightweight simulated Time and Alarm Device.
//!
//! [`SimulatedFirmware`] answers the three control methods from an in-memory
//! record and capability word. Useful for testing and development without
//! firmware access, and as the backend for the command-line tools.

use std::sync::{Mutex, PoisonError};

use rustad_core::record::{TimeRecord, RECORD_WIRE_LEN};
use rustad_core::types::CapabilityMask;

use crate::channel::{FirmwareChannel, FirmwareError, FirmwareObject};

/// An in-memory firmware device.
#[derive(Debug)]
pub struct SimulatedFirmware {
    record: Mutex<TimeRecord>,
    capabilities: u32,
    response_len: usize,
}

impl SimulatedFirmware {
    /// Creates a device holding `record`, with get/set time and AC wake
    /// capability.
    pub fn new(record: TimeRecord) -> Self {
        Self {
            record: Mutex::new(record),
            capabilities: CapabilityMask::GET_SET_TIME | CapabilityMask::AC_WAKE,
            response_len: RECORD_WIRE_LEN,
        }
    }

    /// Replaces the advertised capability word.
    pub fn with_capabilities(mut self, raw: u32) -> Self {
        self.capabilities = raw;
        self
    }

    /// Limits read responses to the first `len` bytes of the wire image,
    /// emulating firmware that omits part (or more) of the trailing pad.
    pub fn with_response_len(mut self, len: usize) -> Self {
        self.response_len = len;
        self
    }

    /// The record currently stored in the device.
    pub fn record(&self) -> TimeRecord {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FirmwareChannel for SimulatedFirmware {
    fn get_capabilities(&self) -> Result<u64, FirmwareError> {
        Ok(self.capabilities as u64)
    }

    fn get_real_time(&self) -> Result<FirmwareObject, FirmwareError> {
        let wire = self.record().to_wire();
        let len = self.response_len.min(wire.len());
        log::debug!("simulated _GRT returning {len} bytes");
        Ok(FirmwareObject::Buffer(wire[..len].to_vec()))
    }

    fn set_real_time(&self, record: &[u8; RECORD_WIRE_LEN]) -> Result<u64, FirmwareError> {
        // Nonzero status for an undecodable image, as a real device would
        // report for a bad parameter.
        match TimeRecord::decode(record) {
            Ok(rec) => {
                log::debug!("simulated _SRT storing {rec:?}");
                *self.record.lock().unwrap_or_else(PoisonError::into_inner) = rec;
                Ok(0)
            }
            Err(_) => Ok(1),
        }
    }
}
