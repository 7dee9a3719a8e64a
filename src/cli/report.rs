use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use midkit::defs::{parse_data_defs_with, parse_ion_defs_with};
use midkit::report::{write_mid_tables_to_path, WriteMode};
use midkit::MidTable;

use super::{heading, warning, Config};

/// Write a MID table for every ion definition to `output`
pub fn run(
    ions: PathBuf,
    data: PathBuf,
    output: PathBuf,
    truncate: bool,
    append: bool,
    config: &Config,
) -> Result<()> {
    let filter = config.line_filter();

    let mut tables = parse_ion_defs_with(&ions, &filter)
        .with_context(|| format!("Failed to parse ion definitions: {}", ions.display()))?;
    let data_files = parse_data_defs_with(&data, &filter)
        .with_context(|| format!("Failed to read data file list: {}", data.display()))?;

    let base_dir = data.parent().unwrap_or_else(|| Path::new(""));
    let missing = flag_missing_data_files(&mut tables, &data_files, base_dir);
    let mode = write_mode(truncate, append, config);

    info!("Ion definitions: {}", ions.display());
    info!("Data file list:  {}", data.display());
    info!("Output:          {} ({:?})", output.display(), mode);

    write_mid_tables_to_path(&tables, &output, mode)
        .with_context(|| format!("Failed to write MID tables: {}", output.display()))?;

    println!("{}", heading("MID Report"));
    println!("  Compounds:  {}", tables.len());
    println!("  Data files: {}", data_files.len());
    if !missing.is_empty() {
        println!(
            "  {}",
            warning(&format!("Missing data files: {}", missing.len()))
        );
    }
    println!("  Written to: {}", output.display());

    Ok(())
}

/// Warn on every table about each listed data file that does not exist.
///
/// Relative names are resolved against `base_dir`. Returns the missing names.
fn flag_missing_data_files(tables: &mut [MidTable], data_files: &[String], base_dir: &Path) -> Vec<String> {
    let missing: Vec<String> = data_files
        .iter()
        .filter(|name| !base_dir.join(name.as_str()).exists())
        .cloned()
        .collect();

    for name in &missing {
        warn!("Data file not found: {}", name);
        for table in tables.iter_mut() {
            table.add_warning(format!("data file not found: {}", name));
        }
    }
    missing
}

/// Command-line flags win over the config file; append is the default
fn write_mode(truncate: bool, append: bool, config: &Config) -> WriteMode {
    if truncate {
        WriteMode::Truncate
    } else if append {
        WriteMode::Append
    } else if config.output.truncate.unwrap_or(false) {
        WriteMode::Truncate
    } else {
        WriteMode::Append
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn tables() -> Vec<MidTable> {
        vec![
            MidTable::new("alanine", 600.0, 116, 3).unwrap(),
            MidTable::new("lactate", 300.0, 117, 4).unwrap(),
        ]
    }

    #[test]
    fn test_missing_data_files_warn_every_table() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("present.cdf"), b"").unwrap();
        let data_files = vec![
            "present.cdf".to_string(),
            "gone.cdf".to_string(),
            "also_gone.cdf".to_string(),
        ];

        let mut tables = tables();
        let missing = flag_missing_data_files(&mut tables, &data_files, dir.path());

        assert_eq!(missing, vec!["gone.cdf", "also_gone.cdf"]);
        for table in &tables {
            assert_eq!(
                table.warnings(),
                &[
                    "data file not found: gone.cdf".to_string(),
                    "data file not found: also_gone.cdf".to_string(),
                ]
            );
        }
    }

    #[test]
    fn test_all_data_files_present() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.cdf"), b"").unwrap();

        let mut tables = tables();
        let missing = flag_missing_data_files(&mut tables, &["a.cdf".to_string()], dir.path());

        assert!(missing.is_empty());
        assert!(tables.iter().all(|t| t.warnings().is_empty()));
    }

    #[test]
    fn test_report_written_despite_missing_data_files() {
        let dir = tempdir().unwrap();
        let ions = dir.path().join("ion_defs.txt");
        let data = dir.path().join("data_files.txt");
        let output = dir.path().join("mid_tables.csv");
        fs::write(&ions, "alanine,10m,116,3\nlactate,5m,117,4\n").unwrap();
        fs::write(&data, "gone.cdf\n").unwrap();

        run(ions, data, output.clone(), true, false, &Config::default()).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("# alanine\n"));
        assert!(text.contains("# lactate\n"));
        assert_eq!(text.matches("# WARNING: data file not found: gone.cdf").count(), 2);
    }

    #[test]
    fn test_write_mode_precedence() {
        let default = Config::default();
        let truncating = Config::from_str("[output]\ntruncate = true").unwrap();

        assert_eq!(write_mode(false, false, &default), WriteMode::Append);
        assert_eq!(write_mode(true, false, &default), WriteMode::Truncate);
        assert_eq!(write_mode(false, false, &truncating), WriteMode::Truncate);
        assert_eq!(write_mode(false, true, &truncating), WriteMode::Append);
    }
}
