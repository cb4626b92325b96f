use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use slidestat::{OUTPUT_FILE_NAME, filter_file};
use std::path::PathBuf;

/// Writes the running mean and median of one CSV column to output.csv.
#[derive(Parser, Debug)]
#[command(name = "slidestat", version)]
struct Cli {
    /// CSV file whose first line is a header
    file: PathBuf,

    /// Number of values in the sliding window
    window_width: usize,

    /// Column to filter, counting from 1
    column: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let summary = filter_file(&cli.file, cli.window_width, cli.column, OUTPUT_FILE_NAME)
        .with_context(|| format!("filtering {}", cli.file.display()))?;

    info!("wrote {OUTPUT_FILE_NAME}: {summary}");
    Ok(())
}
