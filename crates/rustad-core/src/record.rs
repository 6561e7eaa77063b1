use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

/// Full on-wire size of the firmware time record, in bytes.
pub const RECORD_WIRE_LEN: usize = 16;

/// Minimum acceptable length of a firmware-returned record buffer.
///
/// The record ends in a three-byte pad region starting at byte 13; firmware
/// is allowed to omit any part of that trailing pad, but everything before it
/// must be present.
pub const RECORD_MIN_WIRE_LEN: usize = 13;

/// Daylight field bit: this time is affected by daylight saving.
pub const DAYLIGHT_AFFECTED: u8 = 0x1;
/// Daylight field bit: this time has been adjusted for daylight saving.
pub const DAYLIGHT_ADJUSTED: u8 = 0x2;

/// The binary time record exchanged with the firmware's get/set real time
/// control methods.
///
/// Field semantics follow the firmware convention: `year` is absolute
/// (e.g. 2013), `month` is 1-based, `timezone` is signed minutes west of UTC
/// with 2047 reserved for "unspecified" (see [`crate::tz`]), and `daylight`
/// is a bitfield of [`DAYLIGHT_AFFECTED`] and [`DAYLIGHT_ADJUSTED`]. The two
/// pad regions of the wire image are not represented: their bytes are never
/// read and always written as zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeRecord {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub milliseconds: u16,
    pub timezone: i16,
    pub daylight: u8,
}

impl TimeRecord {
    /// Decodes a firmware-returned buffer into a record.
    ///
    /// The buffer length must lie within `[RECORD_MIN_WIRE_LEN,
    /// RECORD_WIRE_LEN]`; anything outside that window is untrusted input and
    /// is rejected without copying any field. Pad bytes are skipped, never
    /// interpreted.
    pub fn decode(buf: &[u8]) -> Result<Self, DecodeError> {
        if buf.len() < RECORD_MIN_WIRE_LEN || buf.len() > RECORD_WIRE_LEN {
            return Err(DecodeError::InvalidLength);
        }
        let mut r = Reader::new(buf);
        let year = r.read_le_u16()?;
        let month = r.read_u8()?;
        let day = r.read_u8()?;
        let hour = r.read_u8()?;
        let minute = r.read_u8()?;
        let second = r.read_u8()?;
        r.skip(1)?;
        let milliseconds = r.read_le_u16()?;
        let timezone = r.read_le_i16()?;
        let daylight = r.read_u8()?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            milliseconds,
            timezone,
            daylight,
        })
    }

    /// Encodes the record as the full fixed-size wire image, pad bytes zeroed.
    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_le_u16(self.year)?;
        w.write_u8(self.month)?;
        w.write_u8(self.day)?;
        w.write_u8(self.hour)?;
        w.write_u8(self.minute)?;
        w.write_u8(self.second)?;
        w.write_u8(0)?;
        w.write_le_u16(self.milliseconds)?;
        w.write_le_i16(self.timezone)?;
        w.write_u8(self.daylight)?;
        w.write_all(&[0u8; 3])
    }

    /// Encodes the record into a fixed wire-image array.
    pub fn to_wire(&self) -> [u8; RECORD_WIRE_LEN] {
        let mut buf = [0u8; RECORD_WIRE_LEN];
        buf[0..2].copy_from_slice(&self.year.to_le_bytes());
        buf[2] = self.month;
        buf[3] = self.day;
        buf[4] = self.hour;
        buf[5] = self.minute;
        buf[6] = self.second;
        buf[8..10].copy_from_slice(&self.milliseconds.to_le_bytes());
        buf[10..12].copy_from_slice(&self.timezone.to_le_bytes());
        buf[12] = self.daylight;
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::{TimeRecord, RECORD_MIN_WIRE_LEN, RECORD_WIRE_LEN};
    use crate::DecodeError;

    fn sample() -> TimeRecord {
        TimeRecord {
            year: 2023,
            month: 3,
            day: 15,
            hour: 10,
            minute: 30,
            second: 0,
            milliseconds: 0,
            timezone: -480,
            daylight: 0,
        }
    }

    #[test]
    fn wire_roundtrip() {
        let rec = sample();
        let wire = rec.to_wire();
        assert_eq!(wire.len(), RECORD_WIRE_LEN);
        assert_eq!(TimeRecord::decode(&wire).unwrap(), rec);
    }

    #[test]
    fn encode_matches_to_wire() {
        let rec = sample();
        let mut buf = [0u8; RECORD_WIRE_LEN];
        let mut w = crate::encoding::Writer::new(&mut buf);
        rec.encode(&mut w).unwrap();
        assert_eq!(w.as_written(), &rec.to_wire());
    }

    #[test]
    fn decode_accepts_truncated_trailing_pad() {
        let wire = sample().to_wire();
        for len in RECORD_MIN_WIRE_LEN..=RECORD_WIRE_LEN {
            assert_eq!(TimeRecord::decode(&wire[..len]).unwrap(), sample());
        }
    }

    #[test]
    fn decode_rejects_short_buffer() {
        let wire = sample().to_wire();
        assert_eq!(
            TimeRecord::decode(&wire[..RECORD_MIN_WIRE_LEN - 1]).unwrap_err(),
            DecodeError::InvalidLength
        );
        assert_eq!(TimeRecord::decode(&[]).unwrap_err(), DecodeError::InvalidLength);
    }

    #[test]
    fn decode_rejects_oversized_buffer() {
        let mut oversized = [0u8; RECORD_WIRE_LEN + 1];
        oversized[..RECORD_WIRE_LEN].copy_from_slice(&sample().to_wire());
        assert_eq!(
            TimeRecord::decode(&oversized).unwrap_err(),
            DecodeError::InvalidLength
        );
    }

    #[test]
    fn pad_bytes_are_ignored() {
        let mut wire = sample().to_wire();
        wire[7] = 0xAA;
        wire[13] = 0xBB;
        wire[14] = 0xCC;
        wire[15] = 0xDD;
        assert_eq!(TimeRecord::decode(&wire).unwrap(), sample());
    }
}
