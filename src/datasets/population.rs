//! Problem 4.1 – `data_LargestPopulation.csv`.
//!
//! The file contains a header and 63 entries in three columns:
//! * Year
//! * Population of India that year (PopIndia)
//! * Population of China that year (PopChina)

use std::path::Path;

use anyhow::Result;

use crate::data::loader::{load_numeric, Delimiter, LoadError, LoadOptions};
use crate::data::model::{NumericTable, Shape};

/// Documented column count of the file.
pub const COLUMNS: usize = 3;

const OPTIONS: LoadOptions = LoadOptions {
    delimiter: Delimiter::Comma,
    skip_header: 1,
};

/// The loaded population table with named column views.
#[derive(Debug, Clone)]
pub struct PopulationTable {
    table: NumericTable,
}

impl PopulationTable {
    pub fn load(path: &Path) -> Result<Self> {
        let table = load_numeric(path, OPTIONS)?;
        if table.n_cols() != COLUMNS {
            return Err(LoadError::ColumnCount {
                expected: COLUMNS,
                found: table.n_cols(),
            }
            .into());
        }
        Ok(PopulationTable { table })
    }

    pub fn shape(&self) -> Shape {
        self.table.shape()
    }

    pub fn year(&self) -> &[f64] {
        self.table.column(0)
    }

    pub fn pop_india(&self) -> &[f64] {
        self.table.column(1)
    }

    pub fn pop_china(&self) -> &[f64] {
        self.table.column(2)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn loads_named_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data_LargestPopulation.csv");
        fs::write(
            &path,
            "Year,PopIndia,PopChina\n\
             1960,450547675,667070000\n\
             1961,459642165,660330000\n",
        )
        .unwrap();

        let data = PopulationTable::load(&path).unwrap();
        assert_eq!(data.shape(), Shape::Matrix(2, COLUMNS));
        assert_eq!(data.year(), &[1960.0, 1961.0]);
        assert_eq!(data.pop_india(), &[450547675.0, 459642165.0]);
        assert_eq!(data.pop_china(), &[667070000.0, 660330000.0]);
    }

    #[test]
    fn wrong_column_count_is_a_schema_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two_cols.csv");
        fs::write(&path, "Year,PopIndia\n1960,450547675\n").unwrap();

        let err = PopulationTable::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::ColumnCount {
                expected: COLUMNS,
                found: 2
            })
        ));
    }
}
