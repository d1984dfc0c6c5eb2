//! Argument surface and run loop for the sqlgen binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::parse_sheets;
use crate::export::DdlGenerator;

#[derive(Parser, Debug)]
#[command(name = "sqlgen", version)]
#[command(about = "Generate MySQL CREATE TABLE statements from spreadsheet schema templates")]
pub struct Args {
    /// Template workbook to read
    #[arg(short, long, value_name = "FILE")]
    pub template: PathBuf,

    /// Sheet selection, e.g. "0", "1-6" or "2,4"
    #[arg(short, long, default_value = "0")]
    pub sheets: String,

    /// Write the statements to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print debug information
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run(args: &Args) -> Result<()> {
    let sheets = parse_sheets(&args.sheets)?;
    debug!(?sheets, "expanded sheet expression");

    let sql = DdlGenerator::generate(&args.template, &sheets)
        .with_context(|| format!("generating DDL from {}", args.template.display()))?;
    DdlGenerator::write(&sql, args.output.as_deref())?;
    Ok(())
}
