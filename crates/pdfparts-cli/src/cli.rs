use std::path::PathBuf;

use clap::Parser;

/// Divide PDF pages in equal parts and print the non-empty ones.
#[derive(Debug, Parser)]
#[command(name = "pdfparts", about, version)]
pub struct Cli {
    /// Number of rows to split each page into
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub rows: u32,

    /// Number of columns to split each page into
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: u32,

    /// Path to the PDF file
    #[arg(value_name = "FILE")]
    pub filename: PathBuf,
}
