//! gcview binary entry point.
//!
//! Parses the CLI surface, runs the extraction pass over the given G-code
//! file, and prints the tiered settings report. Fatal errors (bad tier
//! value, unreadable file) go to stderr with a non-zero exit; the report
//! prints only after extraction fully succeeds.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use gcview::config::{ReportConfig, ViewTier};
use gcview::{extract, report};

#[derive(Parser)]
#[command(name = "gcview", version)]
#[command(about = "Viewer for slicer settings embedded in G-code files", long_about = None)]
struct Cli {
    /// G-code file to read.
    #[arg(short, long)]
    file: PathBuf,

    /// Verbosity tier of the report.
    #[arg(short, long, value_enum, default_value = "simple", ignore_case = true)]
    view: ViewTier,
}

fn run(cli: Cli) -> Result<()> {
    let file = File::open(&cli.file)
        .with_context(|| format!("file \"{}\" does not exist", cli.file.display()))?;

    // The reader is consumed and dropped by the scan; the file is closed
    // before any report output is produced.
    let settings = extract::scan(BufReader::new(file))?;

    let config = ReportConfig {
        file: cli.file,
        view: cli.view,
        settings,
    };
    report::print_report(&config);
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        process::exit(1);
    }
}
