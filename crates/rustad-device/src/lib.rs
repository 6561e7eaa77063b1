//! Device session layer for the firmware Time and Alarm Device.
//!
//! This crate sits between a platform's firmware-evaluation facility and its
//! clock subsystem. The platform implements [`FirmwareChannel`] (three
//! control-method evaluations); [`TadSession`] adds the attach-time
//! capability gate, the shared-lock serialization discipline, validation of
//! untrusted firmware buffers, and the composed read-modify-write time and
//! timezone operations. [`boot`] derives the one-shot boot-time UTC
//! correction from the stored timezone.

pub mod boot;
pub mod channel;
pub mod error;
pub mod session;
pub mod sim;

pub use boot::{assess_clock_correction, ClockAdjustment};
pub use channel::{FirmwareChannel, FirmwareError, FirmwareObject};
pub use error::TadError;
pub use session::TadSession;
pub use sim::SimulatedFirmware;
