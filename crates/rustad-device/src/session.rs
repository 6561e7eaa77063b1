use std::sync::{Arc, Mutex, PoisonError};

use rustad_core::convert::{calendar_to_record, record_to_calendar};
use rustad_core::record::TimeRecord;
use rustad_core::tz;
use rustad_core::types::{CalendarTime, CapabilityMask};

use crate::channel::{FirmwareChannel, FirmwareError, FirmwareObject, METHOD_SET_REAL_TIME};
use crate::error::TadError;

/// An attached Time and Alarm Device.
///
/// Owns the firmware channel, the capability mask queried once at attach
/// time, and a reference to the serialization lock shared with every other
/// clock consumer in the process. All firmware evaluations go through that
/// lock; it is held only for the duration of the evaluation itself, never
/// across record allocation or validation.
#[derive(Debug)]
pub struct TadSession<C> {
    channel: C,
    caps: CapabilityMask,
    rtc_lock: Arc<Mutex<()>>,
}

impl<C: FirmwareChannel> TadSession<C> {
    /// Attaches to the device: queries the capability word once and stores
    /// it for the session's lifetime.
    ///
    /// A failed capability query is fatal: without it the device cannot be
    /// used for time service at all. Missing individual capability bits are
    /// not fatal; the affected operations report [`TadError::CapabilityDenied`]
    /// when called.
    pub fn attach(channel: C, rtc_lock: Arc<Mutex<()>>) -> Result<Self, TadError> {
        let raw = channel.get_capabilities()?;
        let caps = CapabilityMask::from_raw(raw as u32);

        if !caps.supports_time_service() {
            log::warn!("device reports no get/set time support");
        }
        if !caps.supports_ac_wake() {
            log::warn!("device reports no AC wake support; alarm service unavailable");
        }

        Ok(Self {
            channel,
            caps,
            rtc_lock,
        })
    }

    /// The capability mask queried at attach time.
    pub fn capabilities(&self) -> CapabilityMask {
        self.caps
    }

    /// Whether the get/set time operations are available on this device.
    pub fn supports_time_service(&self) -> bool {
        self.caps.supports_time_service()
    }

    /// Whether the device can wake the system on AC power; the minimum
    /// requirement for the (separate) alarm service.
    pub fn supports_ac_wake(&self) -> bool {
        self.caps.supports_ac_wake()
    }

    fn require_time_service(&self) -> Result<(), TadError> {
        if !self.caps.supports_time_service() {
            return Err(TadError::CapabilityDenied);
        }
        Ok(())
    }

    fn with_rtc_lock<T>(&self, op: impl FnOnce(&C) -> T) -> T {
        let _guard = self
            .rtc_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        op(&self.channel)
    }

    /// Reads the raw time record from firmware.
    ///
    /// The returned object must be a buffer whose length falls within the
    /// defined window; anything else is rejected as a malformed response
    /// without copying a single field.
    pub fn read_record(&self) -> Result<TimeRecord, TadError> {
        self.require_time_service()?;

        let obj = self.with_rtc_lock(|ch| ch.get_real_time())?;
        let buf = match obj {
            FirmwareObject::Buffer(buf) => buf,
            FirmwareObject::Integer(_) => {
                return Err(TadError::MalformedResponse("expected a buffer object"))
            }
        };
        TimeRecord::decode(&buf)
            .map_err(|_| TadError::MalformedResponse("buffer length outside record bounds"))
    }

    /// Writes the full fixed-size record to firmware.
    ///
    /// The write is atomic from this layer's point of view: it either takes
    /// effect or fails, with no partial application visible here. Callers
    /// changing a single field must go through the composed operations
    /// below, which read the current record first.
    pub fn write_record(&self, rec: &TimeRecord) -> Result<(), TadError> {
        self.require_time_service()?;

        let wire = rec.to_wire();
        let status = self.with_rtc_lock(|ch| ch.set_real_time(&wire))?;
        if status != 0 {
            return Err(TadError::Firmware(FirmwareError::MethodStatus {
                method: METHOD_SET_REAL_TIME,
                status,
            }));
        }
        Ok(())
    }

    /// Reads the current calendar time.
    pub fn read_time(&self) -> Result<CalendarTime, TadError> {
        let rec = self.read_record()?;
        let tm = record_to_calendar(&rec);
        if !tm.is_valid() {
            return Err(TadError::InvalidDate);
        }
        Ok(tm)
    }

    /// Sets the wall-clock time, preserving the stored timezone.
    ///
    /// The record holds both the clock and the timezone, so this reads the
    /// current record and overwrites only the clock fields before writing
    /// back.
    pub fn set_time(&self, tm: &CalendarTime) -> Result<(), TadError> {
        if !tm.is_valid() {
            return Err(TadError::InvalidArgument("calendar time out of range"));
        }
        let mut rec = self.read_record()?;
        calendar_to_record(tm, &mut rec);
        self.write_record(&rec)
    }

    /// Reads the stored timezone as seconds east of UTC.
    ///
    /// The firmware's "unspecified" sentinel is preserved as
    /// [`tz::UNSPECIFIED_USER_OFFSET`].
    pub fn read_tz_offset(&self) -> Result<i32, TadError> {
        let rec = self.read_record()?;
        tz::user_offset_from_raw(rec.timezone)
            .map_err(|_| TadError::MalformedResponse("timezone outside defined domain"))
    }

    /// Stores a seconds-east-of-UTC timezone, preserving the clock fields.
    pub fn set_tz_offset(&self, offset_secs: i32) -> Result<(), TadError> {
        let raw = tz::raw_from_user_offset(offset_secs)
            .map_err(|_| TadError::InvalidArgument("timezone offset out of range"))?;
        let mut rec = self.read_record()?;
        rec.timezone = raw;
        self.write_record(&rec)
    }
}
