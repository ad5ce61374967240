//! Error types for the pdfparts pipeline.
//!
//! Provides [`PartsError`] covering configuration problems, PDF load and
//! expansion failures, and failures of the two external Ghostscript
//! collaborators (rasterizer and printer).

use std::fmt;
use std::io;

use pdfparts_core::GeometryError;

/// Result type alias for pdfparts operations.
pub type Result<T> = std::result::Result<T, PartsError>;

/// Fatal error types for the split-and-print pipeline.
///
/// All variants abort the run, with one exception: a failed print
/// invocation for an individual page is reported through
/// [`RunSummary::failures`](crate::RunSummary) instead, so one jammed page
/// does not block the rest of the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum PartsError {
    /// Invalid configuration: bad grid shape or missing input file.
    Config(String),
    /// I/O error reading or writing files.
    IoError(String),
    /// Error loading or saving the PDF document.
    Pdf(String),
    /// Error while cloning a page or computing its box during expansion.
    Expand(String),
    /// The external rasterizer failed or produced unusable output.
    Raster(String),
    /// The rasterizer produced a different number of frames than the
    /// expanded document has pages.
    FrameCount {
        /// Pages in the expanded document.
        expected: usize,
        /// Frames found in the rasterized output.
        actual: usize,
    },
    /// The external print invocation for one page failed.
    Print {
        /// 1-indexed page number that failed to print.
        page: usize,
        /// Underlying failure description.
        message: String,
    },
}

impl fmt::Display for PartsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartsError::Config(msg) => write!(f, "configuration error: {msg}"),
            PartsError::IoError(msg) => write!(f, "I/O error: {msg}"),
            PartsError::Pdf(msg) => write!(f, "PDF error: {msg}"),
            PartsError::Expand(msg) => write!(f, "page expansion error: {msg}"),
            PartsError::Raster(msg) => write!(f, "rasterization error: {msg}"),
            PartsError::FrameCount { expected, actual } => write!(
                f,
                "rasterization error: expected {expected} frames, got {actual}"
            ),
            PartsError::Print { page, message } => {
                write!(f, "failed to print page {page}: {message}")
            }
        }
    }
}

impl std::error::Error for PartsError {}

impl From<io::Error> for PartsError {
    fn from(err: io::Error) -> Self {
        PartsError::IoError(err.to_string())
    }
}

impl From<lopdf::Error> for PartsError {
    fn from(err: lopdf::Error) -> Self {
        PartsError::Pdf(err.to_string())
    }
}

impl From<GeometryError> for PartsError {
    fn from(err: GeometryError) -> Self {
        PartsError::Config(err.to_string())
    }
}

impl From<tiff::TiffError> for PartsError {
    fn from(err: tiff::TiffError) -> Self {
        PartsError::Raster(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = PartsError::Config("file not found: in.pdf".to_string());
        assert_eq!(err.to_string(), "configuration error: file not found: in.pdf");
    }

    #[test]
    fn frame_count_display() {
        let err = PartsError::FrameCount {
            expected: 8,
            actual: 6,
        };
        assert_eq!(
            err.to_string(),
            "rasterization error: expected 8 frames, got 6"
        );
    }

    #[test]
    fn print_error_display() {
        let err = PartsError::Print {
            page: 4,
            message: "gs exited with code 1".to_string(),
        };
        assert_eq!(err.to_string(), "failed to print page 4: gs exited with code 1");
    }

    #[test]
    fn from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: PartsError = io_err.into();
        assert!(matches!(err, PartsError::IoError(_)));
        assert!(err.to_string().contains("missing file"));
    }

    #[test]
    fn from_geometry_error() {
        let err: PartsError = GeometryError::InvalidGrid {
            rows: 0,
            columns: 2,
        }
        .into();
        assert!(matches!(err, PartsError::Config(_)));
        assert!(err.to_string().contains("invalid grid shape"));
    }

    #[test]
    fn error_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PartsError::Raster("gs not found".into()));
        assert_eq!(err.to_string(), "rasterization error: gs not found");
    }
}
