use std::fmt;

use super::loader::LoadError;

// ---------------------------------------------------------------------------
// Shape – dimensions of a loaded table
// ---------------------------------------------------------------------------

/// Dimensions of a [`NumericTable`], displayed as a tuple.
///
/// A single-column table is one-dimensional: its shape prints as `(1000,)`
/// rather than `(1000, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Single column: `(rows,)`.
    Vector(usize),
    /// Multiple columns: `(rows, cols)`.
    Matrix(usize, usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(n) => write!(f, "({n},)"),
            Shape::Matrix(rows, cols) => write!(f, "({rows}, {cols})"),
        }
    }
}

// ---------------------------------------------------------------------------
// NumericTable – the complete loaded table
// ---------------------------------------------------------------------------

/// A rectangular table of floats read from a data file.
///
/// Storage is column-major so that a column projection is a borrowed slice
/// into the table, never an owned copy.
#[derive(Debug, Clone)]
pub struct NumericTable {
    columns: Vec<Vec<f64>>,
    n_rows: usize,
}

impl NumericTable {
    /// Build a table from rows. Every row must have the same length and
    /// there must be at least one row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LoadError> {
        let Some(first) = rows.first() else {
            return Err(LoadError::Empty);
        };
        let n_cols = first.len();
        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); n_cols];
        for (row_no, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(LoadError::RaggedRow {
                    row: row_no,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            for (col, &value) in row.iter().enumerate() {
                columns[col].push(value);
            }
        }
        Ok(NumericTable {
            columns,
            n_rows: rows.len(),
        })
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Table dimensions. Single-column tables are one-dimensional.
    pub fn shape(&self) -> Shape {
        match self.n_cols() {
            1 => Shape::Vector(self.n_rows),
            cols => Shape::Matrix(self.n_rows, cols),
        }
    }

    /// Borrowed view of one column across all rows.
    ///
    /// Panics if `idx` is out of range; dataset wrappers validate the column
    /// count before handing out views.
    pub fn column(&self, idx: usize) -> &[f64] {
        &self.columns[idx]
    }
}

/// First `n` values of a column slice (fewer if the column is shorter).
pub fn head(values: &[f64], n: usize) -> &[f64] {
    &values[..values.len().min(n)]
}
