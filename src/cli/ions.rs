use anyhow::{Context, Result};
use std::path::PathBuf;

use midkit::defs::parse_ion_defs_with;

use super::{heading, Config};

/// List the compounds defined in an ion definitions file
pub fn run(file: PathBuf, json: bool, config: &Config) -> Result<()> {
    let tables = parse_ion_defs_with(&file, &config.line_filter())
        .with_context(|| format!("Failed to parse ion definitions: {}", file.display()))?;

    if json {
        let out = serde_json::to_string_pretty(&tables).context("Failed to serialize MID tables")?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", heading("Ion Definitions"));
    println!("{}", heading("==============="));
    println!("File: {}", file.display());
    println!();
    println!("{:<24} {:>10} {:>6} {:>9}", "Compound", "RT (s)", "Ion", "MDV size");
    for table in &tables {
        println!(
            "{:<24} {:>10.3} {:>6} {:>9}",
            table.compound_name(),
            table.rt(),
            table.diagnostic_ion(),
            table.mdv_size()
        );
    }
    println!();
    println!("{} compounds", tables.len());

    Ok(())
}
