//! `jsonq` CLI - evaluate a query expression against a JSON file.
//!
//! ## Usage
//!
//! ```sh
//! # Navigate with a computed index
//! jsonq data.json 'a.b[a.b[1]].c'
//!
//! # Aggregate functions compose with paths and literals
//! jsonq data.json 'max(size(a.b), 7)'
//! ```
//!
//! The result is printed to stdout. Any read, parse, path or evaluation error
//! is reported on stderr with a non-zero exit status.

use anyhow::{Context, Result};
use clap::Parser;
use jsonq_core::Document;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "jsonq",
    version,
    about = "Evaluate path and aggregate expressions against a JSON file"
)]
struct Cli {
    /// JSON document to query
    json_file: PathBuf,

    /// Expression, e.g. `a.b[0]` or `max(size(a.b), 1)`
    expression: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.json_file)
        .with_context(|| format!("Failed to read file: {}", cli.json_file.display()))?;

    let document = Document::parse(&text)
        .with_context(|| format!("Failed to parse JSON in {}", cli.json_file.display()))?;

    let result = document
        .evaluate(&cli.expression)
        .with_context(|| format!("Failed to evaluate expression: {}", cli.expression))?;

    println!("{result}");
    Ok(())
}
