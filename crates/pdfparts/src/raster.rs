//! Rasterization collaborator: render the expanded PDF to a multi-frame
//! grayscale TIFF, then read its frames back as raw pixel buffers.
//!
//! Rasterization itself is delegated to Ghostscript through the
//! [`Rasterizer`] trait seam; frame decoding uses the `tiff` crate.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::Command;

use tiff::decoder::{Decoder, DecodingResult};

use crate::error::{PartsError, Result};

/// Renders a PDF to a multi-frame grayscale image file, one frame per
/// page, in page order.
pub trait Rasterizer {
    fn rasterize(&self, pdf: &Path, tiff: &Path) -> Result<()>;
}

/// Rasterizer that shells out to Ghostscript's `tiffgray` device.
pub struct GhostscriptRasterizer {
    command: String,
}

impl GhostscriptRasterizer {
    /// Use the `gs` binary from PATH.
    pub fn new() -> Self {
        Self {
            command: "gs".to_string(),
        }
    }

    /// Use a specific Ghostscript binary.
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for GhostscriptRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for GhostscriptRasterizer {
    fn rasterize(&self, pdf: &Path, tiff: &Path) -> Result<()> {
        let output = Command::new(&self.command)
            .arg("-dNOPAUSE")
            .arg("-dQUIET")
            .arg("-sDEVICE=tiffgray")
            .arg("-sCompression=lzw")
            .arg("-o")
            .arg(tiff)
            .arg(pdf)
            .output()
            .map_err(|e| PartsError::Raster(format!("failed to run {}: {e}", self.command)))?;

        if !output.status.success() {
            return Err(PartsError::Raster(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

/// Read every frame of a multi-frame grayscale TIFF as raw 8-bit pixels.
///
/// 16-bit grayscale frames are narrowed to 8 bits; other sample formats
/// are rejected as rasterization errors.
pub fn read_frames(path: &Path) -> Result<Vec<Vec<u8>>> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file))?;

    let mut frames = Vec::new();
    loop {
        let frame = match decoder.read_image()? {
            DecodingResult::U8(data) => data,
            DecodingResult::U16(data) => data.into_iter().map(|p| (p >> 8) as u8).collect(),
            _ => {
                return Err(PartsError::Raster(
                    "unsupported TIFF sample format: expected 8- or 16-bit grayscale".to_string(),
                ));
            }
        };
        frames.push(frame);

        if !decoder.more_images() {
            break;
        }
        decoder.next_image()?;
    }
    Ok(frames)
}
