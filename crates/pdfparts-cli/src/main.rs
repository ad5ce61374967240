mod cli;

use clap::Parser;
use pdfparts::{GridSpec, RunConfig, run_with_ghostscript};

use cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(code) = run(&cli) {
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<(), i32> {
    // clap already enforces rows/columns >= 1; this guards the library
    // invariant and reports in the same shape as the other errors.
    let grid = GridSpec::new(cli.rows, cli.columns).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    println!(
        "Splitting PDF file '{}' into {} rows and {} columns per page and printing the non-empty parts to the default printer.",
        cli.filename.display(),
        grid.rows(),
        grid.columns()
    );

    let config = RunConfig {
        input: cli.filename.clone(),
        grid,
    };
    let summary = run_with_ghostscript(&config).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;

    println!(
        "{} sub-pages: {} printed, {} skipped as empty.",
        summary.sub_pages, summary.printed, summary.skipped
    );

    if !summary.is_complete() {
        for failure in &summary.failures {
            eprintln!("Error: failed to print page {}: {}", failure.page, failure.reason);
        }
        return Err(1);
    }
    Ok(())
}
