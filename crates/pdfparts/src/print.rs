//! Printing collaborator: send a single page to the physical device.
//!
//! Printing is delegated to Ghostscript through the [`Printer`] trait
//! seam. Each invocation covers exactly one page: one copy, fit-to-page,
//! no interactive confirmation.

use std::path::Path;
use std::process::Command;

use crate::error::{PartsError, Result};

/// Performs one physical output pass over a single page of a PDF.
///
/// `page` is 1-indexed, matching the external page-range interface.
pub trait Printer {
    fn print_page(&self, pdf: &Path, page: usize) -> Result<()>;
}

/// Printer that shells out to Ghostscript with a printer device.
pub struct GhostscriptPrinter {
    command: String,
    device: String,
}

impl GhostscriptPrinter {
    /// Use `gs` from PATH with the default Windows printer device.
    pub fn new() -> Self {
        Self {
            command: "gs".to_string(),
            device: "mswinpr2".to_string(),
        }
    }

    /// Use a specific Ghostscript output device class.
    pub fn with_device(device: impl Into<String>) -> Self {
        Self {
            command: "gs".to_string(),
            device: device.into(),
        }
    }
}

impl Default for GhostscriptPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer for GhostscriptPrinter {
    fn print_page(&self, pdf: &Path, page: usize) -> Result<()> {
        let output = Command::new(&self.command)
            .arg("-dPrinted") // use the PDF print settings
            .arg("-dNoCancel")
            .arg("-dBATCH")
            .arg("-dNOPAUSE")
            .arg("-dNOSAFER")
            .arg("-q")
            .arg(format!("-dFirstPage={page}"))
            .arg(format!("-dLastPage={page}"))
            .arg("-dPDFFitPage")
            .arg("-dNumCopies=1")
            .arg("-dQueryUser=3") // suppress the printer dialog
            .arg(format!("-sDEVICE={}", self.device))
            .arg(pdf)
            .output()
            .map_err(|e| PartsError::Print {
                page,
                message: format!("failed to run {}: {e}", self.command),
            })?;

        if !output.status.success() {
            return Err(PartsError::Print {
                page,
                message: format!(
                    "{} exited with {}: {}",
                    self.command,
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        Ok(())
    }
}
