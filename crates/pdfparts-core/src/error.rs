//! Error types for pdfparts-core.
//!
//! Provides [`GeometryError`] for invalid grid shapes and page boxes.

use std::fmt;

/// Errors raised by grid and page-box validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The grid shape has a zero row or column count.
    InvalidGrid {
        /// Requested number of rows.
        rows: u32,
        /// Requested number of columns.
        columns: u32,
    },
    /// A page box is degenerate (zero or negative width or height).
    InvalidBox(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidGrid { rows, columns } => write!(
                f,
                "invalid grid shape: rows and columns must be at least 1 (got {rows}x{columns})"
            ),
            GeometryError::InvalidBox(msg) => write!(f, "invalid page box: {msg}"),
        }
    }
}

impl std::error::Error for GeometryError {}
