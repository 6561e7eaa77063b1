use rustad_core::record::RECORD_WIRE_LEN;
use thiserror::Error;

/// Control method evaluated for the capability query.
pub const METHOD_GET_CAPABILITIES: &str = "_GCP";
/// Control method evaluated to read the time record.
pub const METHOD_GET_REAL_TIME: &str = "_GRT";
/// Control method evaluated to write the time record.
pub const METHOD_SET_REAL_TIME: &str = "_SRT";

/// Errors surfaced by a firmware channel implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FirmwareError {
    #[error("firmware device handle is not bound")]
    DeviceAbsent,
    #[error("evaluating {0} failed")]
    Evaluation(&'static str),
    #[error("{method} returned status {status}")]
    MethodStatus { method: &'static str, status: u64 },
}

/// A typed firmware evaluation result.
///
/// Control methods return either a binary buffer or an integer; the session
/// decides which type it will accept for each method and rejects the rest,
/// so a channel implementation never needs to interpret the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirmwareObject {
    Buffer(Vec<u8>),
    Integer(u64),
}

/// Synchronous seam to the platform's firmware-evaluation facility.
///
/// Implementations evaluate the named control methods on the bound device
/// handle and report evaluation failure as [`FirmwareError`]. Evaluation may
/// block for an unbounded (though typically short) time; callers must not
/// invoke these from interrupt context. Implementors include
/// [`SimulatedFirmware`](crate::SimulatedFirmware) for tests and tooling.
pub trait FirmwareChannel: Send + Sync {
    /// Evaluates the capability query, returning the raw capability word.
    fn get_capabilities(&self) -> Result<u64, FirmwareError>;

    /// Evaluates the get-real-time method, returning its result object.
    fn get_real_time(&self) -> Result<FirmwareObject, FirmwareError>;

    /// Evaluates the set-real-time method with the full fixed-size record
    /// image as its sole parameter, returning the integer status.
    fn set_real_time(&self, record: &[u8; RECORD_WIRE_LEN]) -> Result<u64, FirmwareError>;
}
