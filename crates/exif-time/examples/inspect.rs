//! Inspects how metadata time strings are parsed.
//!
//! ```text
//! RUST_LOG=exif_time=trace cargo run --example inspect -- "23:59:59.500Z" "00" "14:05:09+02:00"
//! ```

use exif_time::{ExifTime, TimeFormat};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: inspect <time>...");
        std::process::exit(2);
    }

    for input in &inputs {
        println!("\n=== {:?} ===", input);

        for format in TimeFormat::ALL {
            match format.parse(input.trim()) {
                Ok(time) => println!("  {:<14} ok ({})", format.pattern(), time),
                Err(err) => println!("  {:<14} {}", format.pattern(), err),
            }
        }

        match ExifTime::from_exif(input) {
            Some(time) => {
                println!("Rendered: {}", time);
                println!(
                    "Record:   {}",
                    serde_json::to_string(&time).expect("Failed to serialize")
                );
            }
            None => println!("No value"),
        }
    }
}
