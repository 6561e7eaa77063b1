use clap::{Args, ValueEnum};
use rustad_core::record::{TimeRecord, DAYLIGHT_ADJUSTED, DAYLIGHT_AFFECTED};

/// CLI-friendly enum for the daylight saving tri-state.
///
/// Maps human-readable names to the record's daylight bitfield for use with
/// clap argument parsing.
#[derive(Debug, Clone, ValueEnum)]
pub enum DstArg {
    In,
    NotIn,
    Unknown,
}

impl DstArg {
    /// Convert to the record's daylight bitfield encoding.
    pub const fn daylight_bits(&self) -> u8 {
        match self {
            Self::In => DAYLIGHT_AFFECTED | DAYLIGHT_ADJUSTED,
            Self::NotIn => DAYLIGHT_AFFECTED,
            Self::Unknown => 0,
        }
    }
}

/// Flags describing the record a simulated device starts out with.
#[derive(Debug, Args)]
pub struct RecordArgs {
    #[arg(long, default_value_t = 2026)]
    pub year: u16,
    #[arg(long, default_value_t = 1)]
    pub month: u8,
    #[arg(long, default_value_t = 1)]
    pub day: u8,
    #[arg(long, default_value_t = 0)]
    pub hour: u8,
    #[arg(long, default_value_t = 0)]
    pub minute: u8,
    #[arg(long, default_value_t = 0)]
    pub second: u8,
    /// Stored timezone in minutes west of UTC; 2047 means unspecified.
    #[arg(long, default_value_t = 2047, allow_hyphen_values = true)]
    pub timezone: i16,
    #[arg(long, value_enum, default_value = "unknown")]
    pub dst: DstArg,
}

impl RecordArgs {
    /// Build the firmware record the flags describe.
    pub fn to_record(&self) -> TimeRecord {
        TimeRecord {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            milliseconds: 0,
            timezone: self.timezone,
            daylight: self.dst.daylight_bits(),
        }
    }
}
