//! # midkit
//!
//! Command-line front end for MID table input files and reports.
//!
//! ## Usage
//!
//! ```bash
//! # List the compounds in an ion definitions file
//! midkit ions ion_defs.txt
//!
//! # List the data files to process
//! midkit data data_files.txt
//!
//! # Write a MID table report for every compound
//! midkit report ion_defs.txt data_files.txt mid_tables.csv --truncate
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
