//! Reader for Problem 5.1 (`data_SignalDetection.csv`).
//!
//! The data file contains a header and 120000 entries in five columns:
//! entry index, phase (P), resonance (R), frequency (nu), and entry type
//! (1: signal in control sample, 0: background in control sample, -1: real
//! data sample). Prints the table shape and the first three entries of each
//! column.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use examdata::data::model::head;
use examdata::datasets::signal::SignalTable;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data_SignalDetection.csv"));

    let data = SignalTable::load(&path)?;
    println!("  Shape of data:  {}", data.shape());

    println!("{:?}", data.index().take(3).collect::<Vec<_>>());
    println!("{:?}", head(data.phase(), 3));
    println!("{:?}", head(data.resonance(), 3));
    println!("{:?}", head(data.frequency(), 3));
    println!("{:?}", data.entry_types().take(3).collect::<Vec<_>>());

    Ok(())
}
