#![no_main]

use libfuzzer_sys::fuzz_target;
use rustad_core::convert::record_to_calendar;
use rustad_core::record::TimeRecord;

fuzz_target!(|data: &[u8]| {
    if let Ok(rec) = TimeRecord::decode(data) {
        // Anything that decodes must expand and re-encode without panicking.
        let _ = record_to_calendar(&rec);
        let _ = rec.to_wire();
    }
});
