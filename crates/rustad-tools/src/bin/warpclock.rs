use clap::Parser;
use rustad_device::{assess_clock_correction, SimulatedFirmware, TadSession};
use rustad_tools::RecordArgs;
use std::sync::{Arc, Mutex};

#[derive(Parser, Debug)]
#[command(name = "tad-warpclock")]
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

    match assess_clock_correction(&session) {
        Ok(Some(adjustment)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&adjustment)?);
            } else {
                println!(
                    "clock stores local time ({} mins west of UTC); \
                     mark persistent clock local and inject {} seconds",
                    adjustment.timezone_minutes, adjustment.offset_secs,
                );
            }
        }
        Ok(None) => println!("clock already runs on UTC; no adjustment"),
        // Not fatal at boot: report and carry on without a correction.
        Err(err) => log::warn!("skipping clock correction: {err}"),
    }
    Ok(())
}
