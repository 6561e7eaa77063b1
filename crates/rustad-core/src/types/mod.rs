pub mod calendar;
pub mod capability;

pub use calendar::{CalendarTime, DstState};
pub use capability::CapabilityMask;
