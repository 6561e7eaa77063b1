//! Timezone adaptation between the firmware and userspace conventions.
//!
//! Firmware stores the timezone as signed minutes *west* of UTC in
//! `-1440..=1440`, with [`UNSPECIFIED_TIMEZONE`] (2047) reserved for "not
//! specified, treat the clock as UTC". Userspace offsets are seconds *east*
//! of UTC, so the adaptation is a sign flip plus a unit conversion, with the
//! sentinel preserved in [`UNSPECIFIED_USER_OFFSET`].

use crate::{DecodeError, EncodeError};

/// Reserved firmware timezone value meaning "not specified".
pub const UNSPECIFIED_TIMEZONE: i16 = 2047;

/// Largest valid firmware timezone magnitude, in minutes.
pub const MAX_TIMEZONE_MINUTES: i16 = 1440;

/// The unspecified sentinel expressed in the userspace convention.
pub const UNSPECIFIED_USER_OFFSET: i32 = UNSPECIFIED_TIMEZONE as i32 * 60;

/// Converts a raw firmware timezone to seconds east of UTC.
///
/// The sentinel maps to [`UNSPECIFIED_USER_OFFSET`] in either sign; a raw
/// magnitude beyond [`MAX_TIMEZONE_MINUTES`] is outside the defined domain.
pub fn user_offset_from_raw(raw: i16) -> Result<i32, DecodeError> {
    if raw.unsigned_abs() == UNSPECIFIED_TIMEZONE as u16 {
        return Ok(UNSPECIFIED_USER_OFFSET);
    }
    if raw.unsigned_abs() > MAX_TIMEZONE_MINUTES as u16 {
        return Err(DecodeError::InvalidValue);
    }
    Ok(-(raw as i32) * 60)
}

/// Converts a userspace seconds-east offset to the raw firmware encoding.
///
/// Sub-minute residue is truncated toward zero. The negative of the sentinel
/// cannot be stored and is canonicalized to the positive sentinel; any other
/// out-of-range magnitude is an invalid argument.
pub fn raw_from_user_offset(offset_secs: i32) -> Result<i16, EncodeError> {
    let minutes = -(offset_secs / 60);
    if minutes.unsigned_abs() > MAX_TIMEZONE_MINUTES as u32
        && minutes.unsigned_abs() != UNSPECIFIED_TIMEZONE as u32
    {
        return Err(EncodeError::ValueOutOfRange);
    }
    if minutes == -(UNSPECIFIED_TIMEZONE as i32) {
        return Ok(UNSPECIFIED_TIMEZONE);
    }
    Ok(minutes as i16)
}

/// Whether a raw firmware timezone means the clock already runs on UTC.
///
/// Both the sentinel (in either sign) and an explicit zero offset are UTC by
/// convention.
pub const fn raw_is_utc(raw: i16) -> bool {
    raw == 0 || raw.unsigned_abs() == UNSPECIFIED_TIMEZONE as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn west_offset_maps_to_east_seconds() {
        // UTC-8: firmware stores 480 minutes west, userspace sees -28800 s east.
        assert_eq!(user_offset_from_raw(480).unwrap(), -28_800);
        // The mirrored record value maps to the mirrored offset.
        assert_eq!(user_offset_from_raw(-480).unwrap(), 28_800);
        assert_eq!(user_offset_from_raw(0).unwrap(), 0);
    }

    #[test]
    fn east_seconds_map_to_west_minutes() {
        assert_eq!(raw_from_user_offset(-28_800).unwrap(), 480);
        assert_eq!(raw_from_user_offset(28_800).unwrap(), -480);
        assert_eq!(raw_from_user_offset(0).unwrap(), 0);
    }

    #[test]
    fn sentinel_is_preserved() {
        assert_eq!(
            user_offset_from_raw(UNSPECIFIED_TIMEZONE).unwrap(),
            UNSPECIFIED_USER_OFFSET
        );
        assert_eq!(
            user_offset_from_raw(-UNSPECIFIED_TIMEZONE).unwrap(),
            UNSPECIFIED_USER_OFFSET
        );
        assert_eq!(
            raw_from_user_offset(UNSPECIFIED_USER_OFFSET).unwrap(),
            UNSPECIFIED_TIMEZONE
        );
        // The negative sentinel cannot be stored; it canonicalizes positive.
        assert_eq!(
            raw_from_user_offset(-UNSPECIFIED_USER_OFFSET).unwrap(),
            UNSPECIFIED_TIMEZONE
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(
            user_offset_from_raw(1441).unwrap_err(),
            DecodeError::InvalidValue
        );
        assert_eq!(
            user_offset_from_raw(-1441).unwrap_err(),
            DecodeError::InvalidValue
        );
        assert_eq!(
            raw_from_user_offset(1441 * 60).unwrap_err(),
            EncodeError::ValueOutOfRange
        );
        assert_eq!(
            raw_from_user_offset(-1441 * 60).unwrap_err(),
            EncodeError::ValueOutOfRange
        );
        // The domain edge itself is fine.
        assert_eq!(raw_from_user_offset(1440 * 60).unwrap(), -1440);
        assert_eq!(user_offset_from_raw(1440).unwrap(), -86_400);
    }

    #[test]
    fn sub_minute_residue_truncates() {
        assert_eq!(raw_from_user_offset(-28_830).unwrap(), 480);
        assert_eq!(raw_from_user_offset(59).unwrap(), 0);
    }

    #[test]
    fn utc_predicate() {
        assert!(raw_is_utc(0));
        assert!(raw_is_utc(UNSPECIFIED_TIMEZONE));
        assert!(raw_is_utc(-UNSPECIFIED_TIMEZONE));
        assert!(!raw_is_utc(300));
        assert!(!raw_is_utc(-480));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn whole_minute_offsets_roundtrip(minutes in -1440i32..=1440) {
                let offset = minutes * 60;
                let raw = raw_from_user_offset(offset).unwrap();
                prop_assert_eq!(user_offset_from_raw(raw).unwrap(), offset);
            }
        }
    }
}
