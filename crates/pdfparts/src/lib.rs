//! pdfparts: split PDF pages into an equal-sized grid and print the
//! non-empty parts.
//!
//! The library expands every page of a source document into `rows x
//! columns` sub-region pages (shallow clones with narrowed MediaBoxes),
//! rasterizes the expanded document to a grayscale frame stack, skips
//! frames that contain no marks, and sends the remaining pages to the
//! printer one at a time.
//!
//! Rasterization and printing are external Ghostscript invocations behind
//! the [`Rasterizer`] and [`Printer`] trait seams.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use pdfparts::{GridSpec, RunConfig, run_with_ghostscript};
//!
//! let config = RunConfig {
//!     input: PathBuf::from("input.pdf"),
//!     grid: GridSpec::new(2, 2)?,
//! };
//! let summary = run_with_ghostscript(&config)?;
//! println!("printed {} of {} sub-pages", summary.printed, summary.sub_pages);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod error;
mod expand;
mod pipeline;
mod print;
mod raster;

#[cfg(test)]
mod testutil;

pub use document::{open_source, page_box};
pub use error::{PartsError, Result};
pub use expand::expand;
pub use pipeline::{PrintFailure, RunConfig, RunSummary, run, run_with_ghostscript};
pub use print::{GhostscriptPrinter, Printer};
pub use raster::{GhostscriptRasterizer, Rasterizer, read_frames};

pub use pdfparts_core::{GeometryError, GridCell, GridSpec, PageBox, distinct_values, is_blank};
