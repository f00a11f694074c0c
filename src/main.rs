//! Vending Engine CLI
//!
//! Replays a CSV command script against a fresh vending machine and prints
//! the receipt report.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- script.csv > receipts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use vending_engine::{Result, ScriptError, ScriptRunner};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(ScriptError::MissingArgument);
    }

    let script_path = &args[1];
    let file = File::open(script_path)?;
    let reader = BufReader::new(file);

    let mut runner = ScriptRunner::new();
    runner.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    runner.write_output(handle)?;

    Ok(())
}
