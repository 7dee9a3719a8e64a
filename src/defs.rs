//! # Definition file parsers
//!
//! Two plain-text inputs drive a MID processing run:
//!
//! - an ion definitions file, one compound per line:
//!   ```text
//!   # compound,retention_time,diagnostic_ion,mdv_size
//!   alanine,10.2m,116,3
//!   pyruvate,"1 min",87,5
//!   ```
//! - a data file list, one raw data file name per line.
//!
//! Blank lines and comment lines are skipped in both (see [`LineFilter`]).
//! Parsing stops at the first malformed line and no partial result is
//! returned.

use std::path::Path;

use log::{debug, error, info};

use crate::io::{file_lines, LineFilter};
use crate::mid::{MidError, MidTable};
use crate::time::time_str_secs;

/// Number of comma-separated fields in an ion definition line
pub const ION_DEF_FIELDS: usize = 4;

/// Read ion definitions and return one empty MID table per definition
pub fn parse_ion_defs<P: AsRef<Path>>(path: P) -> Result<Vec<MidTable>, MidError> {
    parse_ion_defs_with(path, &LineFilter::default())
}

/// Read ion definitions using a custom line filter
pub fn parse_ion_defs_with<P: AsRef<Path>>(
    path: P,
    filter: &LineFilter,
) -> Result<Vec<MidTable>, MidError> {
    let path = path.as_ref();
    let lines = file_lines(path, filter)?;
    let file = path.display().to_string();

    let tables = match ion_defs_from_lines(&file, &lines) {
        Ok(tables) => tables,
        Err(e) => {
            if let MidError::Format { line, .. } = &e {
                error!("Input file: {}", file);
                error!("Line: {}", line);
            }
            return Err(e);
        }
    };

    info!("Read {} ion definitions from {}", tables.len(), file);
    Ok(tables)
}

/// Parse already-filtered ion definition lines; `file` is used for error context
pub fn ion_defs_from_lines<S: AsRef<str>>(file: &str, lines: &[S]) -> Result<Vec<MidTable>, MidError> {
    lines
        .iter()
        .map(|line| parse_ion_def(file, line.as_ref()))
        .collect()
}

fn parse_ion_def(file: &str, line: &str) -> Result<MidTable, MidError> {
    let items: Vec<&str> = line.split(',').collect();
    if items.len() != ION_DEF_FIELDS {
        return Err(MidError::format(
            file,
            line,
            format!(
                "a MID specification must have exactly {} elements, found {}",
                ION_DEF_FIELDS,
                items.len()
            ),
        ));
    }

    let compound_name = items[0];
    let rt = time_str_secs(items[1]).map_err(|e| MidError::format(file, line, e))?;
    let diagnostic_ion: i64 = items[2].trim().parse().map_err(|e| {
        MidError::format(file, line, format!("diagnostic ion '{}': {}", items[2], e))
    })?;
    let mdv_size: usize = items[3].trim().parse().map_err(|e| {
        MidError::format(file, line, format!("MDV size '{}': {}", items[3], e))
    })?;

    let table = MidTable::new(compound_name, rt, diagnostic_ion, mdv_size)
        .map_err(|e| MidError::format(file, line, e))?;

    debug!(
        "Ion definition: {} rt={:.3}s ion={} mdv_size={}",
        compound_name, rt, diagnostic_ion, mdv_size
    );
    Ok(table)
}

/// Read data file names, one per line, in file order
pub fn parse_data_defs<P: AsRef<Path>>(path: P) -> Result<Vec<String>, MidError> {
    parse_data_defs_with(path, &LineFilter::default())
}

/// Read data file names using a custom line filter
pub fn parse_data_defs_with<P: AsRef<Path>>(
    path: P,
    filter: &LineFilter,
) -> Result<Vec<String>, MidError> {
    let path = path.as_ref();
    let data_files = file_lines(path, filter)?;
    info!("Read {} data file names from {}", data_files.len(), path.display());
    Ok(data_files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines() {
        let lines = ["alanine,10m,116,3", "pyruvate,\"1 min\",87,5", "glycine,540,102,3"];
        let tables = ion_defs_from_lines("defs.txt", &lines).unwrap();

        assert_eq!(tables.len(), 3);
        assert_eq!(tables[0].compound_name(), "alanine");
        assert_eq!(tables[0].rt(), 600.0);
        assert_eq!(tables[0].diagnostic_ion(), 116);
        assert_eq!(tables[0].mdv_size(), 3);

        assert_eq!(tables[1].compound_name(), "pyruvate");
        assert_eq!(tables[1].rt(), 60.0);
        assert_eq!(tables[1].diagnostic_ion(), 87);
        assert_eq!(tables[1].mdv_size(), 5);

        assert_eq!(tables[2].rt(), 540.0);
    }

    #[test]
    fn test_wrong_field_count() {
        for line in ["glucose,120,57", "glucose,120,57,3,9", "glucose"] {
            let err = ion_defs_from_lines("defs.txt", &[line]).unwrap_err();
            match err {
                MidError::Format { file, line: bad, .. } => {
                    assert_eq!(file, "defs.txt");
                    assert_eq!(bad, line);
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_non_numeric_fields() {
        for line in ["glucose,120,57,abc", "glucose,120,x57,3", "glucose,120,57,-3"] {
            assert!(matches!(
                ion_defs_from_lines("defs.txt", &[line]),
                Err(MidError::Format { .. })
            ));
        }
    }

    #[test]
    fn test_bad_time_is_format_error() {
        let err = ion_defs_from_lines("defs.txt", &["glucose,12h,57,3"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("defs.txt"));
        assert!(message.contains("glucose,12h,57,3"));
        assert!(message.contains("12h"));
    }

    #[test]
    fn test_zero_mdv_size_rejected() {
        assert!(matches!(
            ion_defs_from_lines("defs.txt", &["glucose,120,57,0"]),
            Err(MidError::Format { .. })
        ));
    }

    #[test]
    fn test_first_error_wins() {
        let lines = ["alanine,10m,116,3", "bad,line", "also,bad"];
        match ion_defs_from_lines("defs.txt", &lines).unwrap_err() {
            MidError::Format { line, .. } => assert_eq!(line, "bad,line"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
