//! ACPI Time and Alarm Device (TAD) encoding and conversion in pure Rust.
//!
//! `rustad-core` provides `no_std`-compatible decoding and encoding of the
//! TAD firmware time record, conversion between the record and an OS-style
//! broken-down calendar time, and the timezone adaptation between the
//! firmware's minutes-west convention and seconds-east userspace offsets.
//! It forms the foundation of the rustad crate family and can be used
//! standalone in constrained environments.
//!
//! # Feature flags
//!
//! - **`std`** (default) — enables `std::error::Error` implementations.
//! - **`serde`** — derives `Serialize`/`Deserialize` on core types.
//! - **`defmt`** — derives `defmt::Format` for embedded logging.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversion between [`CalendarTime`](types::CalendarTime) and [`TimeRecord`](record::TimeRecord).
pub mod convert;
/// Binary encoding primitives: bounds-checked little-endian reader and writer.
pub mod encoding;
/// Error types for encoding and decoding operations.
pub mod error;
/// The firmware time record and its bounded wire codec.
pub mod record;
/// Timezone adaptation between firmware and userspace offset conventions.
pub mod tz;
/// Core data types: calendar time, DST state, and the capability mask.
pub mod types;

pub use error::{DecodeError, EncodeError};
pub use record::TimeRecord;
pub use types::{CalendarTime, CapabilityMask, DstState};
