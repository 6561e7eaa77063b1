use clap::Parser;
use rustad_device::{SimulatedFirmware, TadSession};
use rustad_tools::RecordArgs;
use std::sync::{Arc, Mutex};

#[derive(Parser, Debug)]
#[command(name = "tad-readtime")]
struct Args {
    #[command(flatten)]
    record: RecordArgs,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let firmware = SimulatedFirmware::new(args.record.to_record());
    let session = TadSession::attach(firmware, Arc::new(Mutex::new(())))?;

    let time = session.read_time()?;
    let tz_offset_secs = session.read_tz_offset()?;

    if args.json {
        let report = serde_json::json!({
            "time": time,
            "tz_offset_secs": tz_offset_secs,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02} (weekday {}, yday {}), dst {:?}",
            time.year + 1900,
            time.month + 1,
            time.day,
            time.hour,
            time.minute,
            time.second,
            time.weekday,
            time.yday,
            time.dst,
        );
        println!("timezone offset: {tz_offset_secs} seconds east of UTC");
    }
    Ok(())
}
