//! Conversion between the firmware time record and OS calendar time.
//!
//! The record stores an absolute year and a 1-based month; calendar time is
//! `tm`-shaped (years since 1900, 0-based month). Weekday and year-day are
//! derived from the date on every record-to-calendar conversion. The record's
//! `timezone` field is deliberately left alone by [`calendar_to_record`]:
//! whoever writes a record is responsible for carrying the current timezone
//! over (see the session's read-modify-write paths).

use crate::record::{TimeRecord, DAYLIGHT_ADJUSTED, DAYLIGHT_AFFECTED};
use crate::types::calendar::{week_day, year_day, CalendarTime, DstState};

/// Projects a calendar time onto an existing record, leaving `timezone`
/// untouched.
///
/// Milliseconds are zeroed: the calendar representation has no sub-second
/// resolution. The daylight field encodes the tri-state losslessly so that
/// [`record_to_calendar`] restores it.
pub fn calendar_to_record(tm: &CalendarTime, rec: &mut TimeRecord) {
    rec.year = (tm.year + 1900) as u16;
    rec.month = tm.month + 1;
    rec.day = tm.day;
    rec.hour = tm.hour;
    rec.minute = tm.minute;
    rec.second = tm.second;
    rec.milliseconds = 0;
    rec.daylight = match tm.dst {
        DstState::InDst => DAYLIGHT_AFFECTED | DAYLIGHT_ADJUSTED,
        DstState::NotInDst => DAYLIGHT_AFFECTED,
        DstState::Unknown => 0,
    };
}

/// Expands a firmware record into calendar time, deriving weekday and
/// year-day from the date fields.
///
/// A pre-1900 year leaves `weekday` at the error sentinel while `yday` is
/// still computed. The daylight bitfield maps to the tri-state: adjusted set
/// means in DST, affected alone means not in DST, neither means unknown.
pub fn record_to_calendar(rec: &TimeRecord) -> CalendarTime {
    let year = rec.year as i32;
    let month = rec.month.saturating_sub(1);
    CalendarTime {
        year: year - 1900,
        month,
        day: rec.day,
        hour: rec.hour,
        minute: rec.minute,
        second: rec.second,
        weekday: week_day(rec.day, month, year),
        yday: year_day(rec.day, month, year),
        dst: if rec.daylight & DAYLIGHT_ADJUSTED != 0 {
            DstState::InDst
        } else if rec.daylight & DAYLIGHT_AFFECTED != 0 {
            DstState::NotInDst
        } else {
            DstState::Unknown
        },
    }
}
