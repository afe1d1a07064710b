//! Reader for Problem 4.1 (`data_LargestPopulation.csv`).
//!
//! The data file contains a header and 63 entries in three columns: Year,
//! PopIndia, PopChina. Prints the table shape and the three column slices.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use examdata::datasets::population::PopulationTable;

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data_LargestPopulation.csv"));

    let data = PopulationTable::load(&path)?;
    println!("{}", data.shape());

    println!("{:?}", data.year());
    println!("{:?}", data.pop_india());
    println!("{:?}", data.pop_china());

    Ok(())
}
