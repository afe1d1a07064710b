//! Problem 5.2 – `data_DecayTimes.csv`.
//!
//! The file contains 1000 entries with measured decay times in seconds, one
//! per line, no header. A single column, so the shape is one-dimensional.

use std::path::Path;

use anyhow::Result;

use crate::data::loader::{load_numeric, Delimiter, LoadError, LoadOptions};
use crate::data::model::{NumericTable, Shape};

/// Documented column count of the file.
pub const COLUMNS: usize = 1;

const OPTIONS: LoadOptions = LoadOptions {
    delimiter: Delimiter::Whitespace,
    skip_header: 0,
};

/// The loaded decay-time measurements.
#[derive(Debug, Clone)]
pub struct DecayTimes {
    table: NumericTable,
}

impl DecayTimes {
    pub fn load(path: &Path) -> Result<Self> {
        let table = load_numeric(path, OPTIONS)?;
        if table.n_cols() != COLUMNS {
            return Err(LoadError::ColumnCount {
                expected: COLUMNS,
                found: table.n_cols(),
            }
            .into());
        }
        Ok(DecayTimes { table })
    }

    pub fn shape(&self) -> Shape {
        self.table.shape()
    }

    /// Measured decay times in seconds.
    pub fn times(&self) -> &[f64] {
        self.table.column(0)
    }
}
