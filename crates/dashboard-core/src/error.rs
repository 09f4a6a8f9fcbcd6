// File: crates/dashboard-core/src/error.rs
// Summary: Error taxonomy for payload validation, cell coercion and import.

use std::fmt;

/// Which side of the payload an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// What a cell was expected to parse as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    Number,
    EpochMillis,
    Date { format: String },
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Number => f.write_str("a finite number"),
            Expected::EpochMillis => f.write_str("milliseconds since the epoch"),
            Expected::Date { format } => write!(f, "a date matching '{format}'"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReshapeError {
    #[error("payload has no x columns; column 0 is required as the key")]
    MissingKeyColumn,

    #[error("{axis} headers ({headers}) do not match {axis} value columns ({columns})")]
    HeaderCount { axis: Axis, headers: usize, columns: usize },

    #[error("column '{header}' has {actual} rows, expected {expected}")]
    ColumnLength { header: String, expected: usize, actual: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, actual: usize },

    #[error("cell '{value}' in column '{header}' at row {row} is not {expected}")]
    Coercion { header: String, row: usize, value: String, expected: Expected },

    #[error("{axis} headers differ between the payload and the appended page")]
    HeaderMismatch { axis: Axis },

    #[error("csv import failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("json decoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReshapeError {
    /// True for the malformed-shape family (header counts, ragged columns or rows).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            ReshapeError::MissingKeyColumn
                | ReshapeError::HeaderCount { .. }
                | ReshapeError::ColumnLength { .. }
                | ReshapeError::RaggedRow { .. }
        )
    }

    pub fn is_coercion_error(&self) -> bool {
        matches!(self, ReshapeError::Coercion { .. })
    }
}

pub type Result<T, E = ReshapeError> = std::result::Result<T, E>;
