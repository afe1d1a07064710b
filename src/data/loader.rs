use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use thiserror::Error;

use super::model::NumericTable;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A structural problem in a data file. I/O and CSV-level failures surface
/// through [`anyhow`] with file/row context attached.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data row {row}: expected {expected} columns, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("data row {row}, column {col}: '{token}' is not a number")]
    BadNumber {
        row: usize,
        col: usize,
        token: String,
    },
    #[error("expected {expected} columns, file has {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("file contains no data rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Field separator of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Whitespace,
}

/// How to read a data file into a [`NumericTable`].
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: Delimiter,
    /// Number of leading header rows to discard.
    pub skip_header: usize,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited text file into a numeric table.
///
/// Comma-delimited files go through the `csv` crate; whitespace-delimited
/// files are split line by line, skipping blank lines. Any row whose width
/// differs from the first data row, and any token that does not parse as a
/// float, is an error.
pub fn load_numeric(path: &Path, options: LoadOptions) -> Result<NumericTable> {
    let table = match options.delimiter {
        Delimiter::Comma => load_comma(path, options.skip_header),
        Delimiter::Whitespace => load_whitespace(path, options.skip_header),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    debug!("loaded table {} from {}", table.shape(), path.display());
    Ok(table)
}

// ---------------------------------------------------------------------------
// Comma-delimited loader
// ---------------------------------------------------------------------------

fn load_comma(path: &Path, skip_header: usize) -> Result<NumericTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let mut rows = Vec::new();
    for (rec_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV record {rec_no}"))?;
        if rec_no < skip_header {
            continue;
        }
        let row_no = rec_no - skip_header;
        rows.push(parse_row(record.iter(), row_no)?);
    }

    Ok(NumericTable::from_rows(rows)?)
}

// ---------------------------------------------------------------------------
// Whitespace-delimited loader
// ---------------------------------------------------------------------------

fn load_whitespace(path: &Path, skip_header: usize) -> Result<NumericTable> {
    let file = File::open(path).context("opening data file")?;

    let mut rows = Vec::new();
    let mut line_no = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        line_no += 1;
        if line_no <= skip_header {
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        rows.push(parse_row(trimmed.split_whitespace(), rows.len())?);
    }

    Ok(NumericTable::from_rows(rows)?)
}

// ---------------------------------------------------------------------------
// Shared row parsing
// ---------------------------------------------------------------------------

fn parse_row<'a>(fields: impl Iterator<Item = &'a str>, row: usize) -> Result<Vec<f64>, LoadError> {
    fields
        .enumerate()
        .map(|(col, token)| {
            token.parse::<f64>().map_err(|_| LoadError::BadNumber {
                row,
                col,
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::data::model::Shape;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    const COMMA: LoadOptions = LoadOptions {
        delimiter: Delimiter::Comma,
        skip_header: 1,
    };

    const PLAIN: LoadOptions = LoadOptions {
        delimiter: Delimiter::Whitespace,
        skip_header: 0,
    };

    #[test]
    fn comma_file_with_header_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "pop.csv",
            "Year,PopIndia,PopChina\n1960,4.5e8,6.6e8\n1961,4.6e8,6.6e8\n",
        );

        let table = load_numeric(&path, COMMA).unwrap();
        assert_eq!(table.shape(), Shape::Matrix(2, 3));
        assert_eq!(table.column(0), &[1960.0, 1961.0]);
        assert_eq!(table.column(1), &[4.5e8, 4.6e8]);
    }

    #[test]
    fn whitespace_file_loads_as_vector() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "decay.csv", "0.31\n1.27\n\n0.05\n");

        let table = load_numeric(&path, PLAIN).unwrap();
        assert_eq!(table.shape(), Shape::Vector(3));
        assert_eq!(table.column(0), &[0.31, 1.27, 0.05]);
    }

    #[test]
    fn bad_token_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.csv", "a,b\n1.0,oops\n");

        let err = load_numeric(&path, COMMA).unwrap_err();
        let load_err = err.downcast_ref::<LoadError>().unwrap();
        assert!(matches!(
            load_err,
            LoadError::BadNumber { row: 0, col: 1, token } if token == "oops"
        ));
    }

    #[test]
    fn ragged_whitespace_row_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "ragged.csv", "1.0 2.0\n3.0\n");

        let err = load_numeric(&path, PLAIN).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn header_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "empty.csv", "Year,PopIndia,PopChina\n");

        let err = load_numeric(&path, COMMA).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::Empty)
        ));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_numeric(&dir.path().join("nope.csv"), COMMA).is_err());
    }
}
