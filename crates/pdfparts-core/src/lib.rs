//! pdfparts-core: Backend-independent geometry and blank detection.
//!
//! This crate provides the grid-splitting math ([`PageBox`], [`GridSpec`],
//! [`GridCell`]) and the blank-frame heuristic ([`is_blank`]) used by
//! pdfparts-rs. It has no external dependencies — all functionality is
//! pure Rust.

mod blank;
mod error;
mod geometry;

pub use blank::{distinct_values, is_blank};
pub use error::GeometryError;
pub use geometry::{GridCell, GridSpec, PageBox};
