//! Errors raised when building grids and rules

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("grid cannot be empty")]
    EmptyGrid,

    #[error("row {row} has length {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        actual: usize,
        expected: usize,
    },

    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("buffer is {actual_rows}x{actual_cols}, expected {rows}x{cols}")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("invalid rule '{0}', expected notation like B3/S23")]
    InvalidRule(String),
}
