//! Boot-time UTC correction.
//!
//! The firmware clock may store local time rather than UTC; the stored
//! timezone field says which. Once, during system initialization, the boot
//! sequencer asks this module whether the running wall clock needs a one-time
//! adjustment. Failure to read the timezone is reported, not swallowed; the
//! sequencer decides whether to log and continues booting either way.

use rustad_core::tz;

use crate::channel::FirmwareChannel;
use crate::error::TadError;
use crate::session::TadSession;

/// A one-time wall-clock adjustment derived from the stored timezone.
///
/// Presence of this value means the hardware clock runs on local time: the
/// host clock subsystem should mark its persistent clock as local and inject
/// `offset_secs` into the running wall clock, both exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockAdjustment {
    /// Seconds to add to the running wall clock.
    pub offset_secs: i64,
    /// The stored timezone (minutes west of UTC) that triggered the
    /// adjustment.
    pub timezone_minutes: i16,
}

/// Determines whether the running clock needs the boot-time correction.
///
/// Reads the stored timezone through a one-shot record read. A timezone of
/// zero or the unspecified sentinel means the clock already runs on UTC and
/// no adjustment is needed. Any other in-domain value yields an adjustment of
/// `timezone * 60` seconds.
pub fn assess_clock_correction<C: FirmwareChannel>(
    session: &TadSession<C>,
) -> Result<Option<ClockAdjustment>, TadError> {
    let rec = session.read_record()?;
    let timezone = rec.timezone;

    if tz::raw_is_utc(timezone) {
        return Ok(None);
    }
    if timezone.unsigned_abs() > tz::MAX_TIMEZONE_MINUTES as u16 {
        return Err(TadError::MalformedResponse("timezone outside defined domain"));
    }

    Ok(Some(ClockAdjustment {
        offset_secs: timezone as i64 * 60,
        timezone_minutes: timezone,
    }))
}
