use crate::channel::FirmwareError;
use thiserror::Error;

/// Errors surfaced by the time-service operations.
///
/// Everything here is reported synchronously to the immediate caller; no
/// operation retries internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TadError {
    #[error("firmware device handle is not bound")]
    DeviceAbsent,
    #[error("operation requires a capability the device does not report")]
    CapabilityDenied,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("firmware device unavailable: {0}")]
    Firmware(#[source] FirmwareError),
    #[error("malformed firmware response: {0}")]
    MalformedResponse(&'static str),
    #[error("firmware reported an invalid date")]
    InvalidDate,
}

impl From<FirmwareError> for TadError {
    fn from(err: FirmwareError) -> Self {
        match err {
            FirmwareError::DeviceAbsent => Self::DeviceAbsent,
            other => Self::Firmware(other),
        }
    }
}
