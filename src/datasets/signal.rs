//! Problem 5.1 – `data_SignalDetection.csv`.
//!
//! The file contains a header and 120000 entries in five columns:
//! * Entry number (i.e. index)
//! * Phase (P)
//! * Resonance (R)
//! * Frequency (nu)
//! * Entry type (1: Signal in Control Sample, 0: Background in Control
//!   Sample, -1: Real data sample)

use std::path::Path;

use anyhow::Result;

use crate::data::loader::{load_numeric, Delimiter, LoadError, LoadOptions};
use crate::data::model::{NumericTable, Shape};

/// Documented column count of the file.
pub const COLUMNS: usize = 5;

/// Entry-type code for signal rows in the control sample.
pub const TYPE_SIGNAL: i64 = 1;
/// Entry-type code for background rows in the control sample.
pub const TYPE_BACKGROUND: i64 = 0;
/// Entry-type code for rows in the real data sample.
pub const TYPE_REAL_DATA: i64 = -1;

const OPTIONS: LoadOptions = LoadOptions {
    delimiter: Delimiter::Comma,
    skip_header: 1,
};

/// The loaded signal-detection table with named column views.
///
/// Index and entry type are stored as floats like every other column; the
/// accessors cast them to integers at the view boundary.
#[derive(Debug, Clone)]
pub struct SignalTable {
    table: NumericTable,
}

impl SignalTable {
    pub fn load(path: &Path) -> Result<Self> {
        let table = load_numeric(path, OPTIONS)?;
        if table.n_cols() != COLUMNS {
            return Err(LoadError::ColumnCount {
                expected: COLUMNS,
                found: table.n_cols(),
            }
            .into());
        }
        Ok(SignalTable { table })
    }

    pub fn shape(&self) -> Shape {
        self.table.shape()
    }

    /// Entry numbers, cast to integers.
    pub fn index(&self) -> impl Iterator<Item = i64> + '_ {
        self.table.column(0).iter().map(|&v| v as i64)
    }

    pub fn phase(&self) -> &[f64] {
        self.table.column(1)
    }

    pub fn resonance(&self) -> &[f64] {
        self.table.column(2)
    }

    pub fn frequency(&self) -> &[f64] {
        self.table.column(3)
    }

    /// Entry-type codes, cast to integers (see the `TYPE_*` constants).
    pub fn entry_types(&self) -> impl Iterator<Item = i64> + '_ {
        self.table.column(4).iter().map(|&v| v as i64)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn loads_and_casts_integral_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_SignalDetection.csv");
        fs::write(
            &path,
            "index,P,R,nu,type\n\
             0,0.774,1.033,0.9237,1\n\
             1,1.566,0.877,1.0034,0\n\
             2,0.343,1.198,1.1123,-1\n",
        )
        .unwrap();

        let data = SignalTable::load(&path).unwrap();
        assert_eq!(data.shape(), Shape::Matrix(3, COLUMNS));
        assert_eq!(data.index().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(data.phase(), &[0.774, 1.566, 0.343]);
        assert_eq!(data.resonance(), &[1.033, 0.877, 1.198]);
        assert_eq!(data.frequency(), &[0.9237, 1.0034, 1.1123]);
        assert_eq!(
            data.entry_types().collect::<Vec<_>>(),
            vec![TYPE_SIGNAL, TYPE_BACKGROUND, TYPE_REAL_DATA]
        );
    }

    #[test]
    fn wrong_column_count_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("four_cols.csv");
        fs::write(&path, "index,P,R,nu\n0,0.774,1.033,0.9237\n").unwrap();

        let err = SignalTable::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::ColumnCount {
                expected: COLUMNS,
                found: 4
            })
        ));
    }
}
