//! Reader for Problem 5.2 (`data_DecayTimes.csv`).
//!
//! The data file contains 1000 entries with measured decay times in seconds,
//! one per line, no header. Prints the shape and the first ten entries.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use examdata::data::model::head;
use examdata::datasets::decay::DecayTimes;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data_DecayTimes.csv"));

    let data = DecayTimes::load(&path)?;
    println!("{}", data.shape());

    // Print the first ten entries to get a feel for the data.
    println!("{:?}", head(data.times(), 10));

    Ok(())
}
