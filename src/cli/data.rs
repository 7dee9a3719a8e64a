use anyhow::{Context, Result};
use std::path::PathBuf;

use midkit::defs::parse_data_defs_with;

use super::Config;

/// Print the data file names listed in a file
pub fn run(file: PathBuf, config: &Config) -> Result<()> {
    let data_files = parse_data_defs_with(&file, &config.line_filter())
        .with_context(|| format!("Failed to read data file list: {}", file.display()))?;

    for name in &data_files {
        println!("{}", name);
    }

    Ok(())
}
