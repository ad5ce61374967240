//! The pipeline driver: expand, rasterize, detect blanks, print.
//!
//! Stages run strictly in sequence. The expanded document and its
//! rasterization live in a scoped temporary directory that is removed on
//! every exit path. Expansion and rasterization failures abort the run;
//! a failed print invocation for one page is recorded and the remaining
//! pages are still processed.

use std::path::PathBuf;

use log::{info, warn};
use pdfparts_core::{GridSpec, is_blank};

use crate::document::open_source;
use crate::error::{PartsError, Result};
use crate::expand::expand;
use crate::print::{GhostscriptPrinter, Printer};
use crate::raster::{GhostscriptRasterizer, Rasterizer, read_frames};

/// Configuration for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Path to the source PDF.
    pub input: PathBuf,
    /// Grid shape to split each page into.
    pub grid: GridSpec,
}

/// A print invocation that failed for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintFailure {
    /// 1-indexed page number in the expanded document.
    pub page: usize,
    /// Description of the underlying failure.
    pub reason: String,
}

/// Outcome of a completed pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Total sub-region pages in the expanded document.
    pub sub_pages: usize,
    /// Pages sent to the printer successfully.
    pub printed: usize,
    /// Pages skipped as blank.
    pub skipped: usize,
    /// Print invocations that failed.
    pub failures: Vec<PrintFailure>,
}

impl RunSummary {
    /// Returns true if every non-blank page was printed successfully.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run the pipeline with the given external collaborators.
pub fn run(config: &RunConfig, rasterizer: &dyn Rasterizer, printer: &dyn Printer) -> Result<RunSummary> {
    let source = open_source(&config.input)?;
    let expected = source.get_pages().len() * config.grid.cell_count();

    let mut expanded = expand(&source, config.grid)?;

    // Scoped working area; deleted when dropped, on success and on error.
    let workdir = tempfile::TempDir::new()?;
    let pdf_path = workdir.path().join("pdfparts.pdf");
    let tiff_path = workdir.path().join("pdfparts.tif");
    expanded.save(&pdf_path)?;

    rasterizer.rasterize(&pdf_path, &tiff_path)?;
    let frames = read_frames(&tiff_path)?;
    if frames.len() != expected {
        return Err(PartsError::FrameCount {
            expected,
            actual: frames.len(),
        });
    }

    let mut summary = RunSummary {
        sub_pages: expected,
        printed: 0,
        skipped: 0,
        failures: Vec::new(),
    };
    for (index, frame) in frames.iter().enumerate() {
        let page = index + 1;
        if is_blank(frame) {
            info!("skipping empty page {page}");
            summary.skipped += 1;
            continue;
        }
        info!("printing page {page}");
        match printer.print_page(&pdf_path, page) {
            Ok(()) => summary.printed += 1,
            Err(err) => {
                warn!("{err}");
                let reason = match err {
                    PartsError::Print { message, .. } => message,
                    other => other.to_string(),
                };
                summary.failures.push(PrintFailure { page, reason });
            }
        }
    }
    Ok(summary)
}

/// Run the pipeline with the production Ghostscript collaborators.
pub fn run_with_ghostscript(config: &RunConfig) -> Result<RunSummary> {
    run(
        config,
        &GhostscriptRasterizer::new(),
        &GhostscriptPrinter::new(),
    )
}
