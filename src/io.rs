//! Line-oriented reading of definition files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::mid::MidError;

/// Controls which lines [`file_lines`] keeps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFilter {
    /// Trim lines and drop blank and comment lines.
    /// When false, lines are returned verbatim.
    pub enabled: bool,

    /// Lines starting with this marker (after trimming) are comments.
    /// An empty marker keeps every non-blank line.
    pub comment_marker: String,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self {
            enabled: true,
            comment_marker: "#".to_string(),
        }
    }
}

impl LineFilter {
    /// Filter that keeps every line untouched
    pub fn none() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Apply the filter to a single raw line
    pub fn apply<'a>(&self, line: &'a str) -> Option<&'a str> {
        if !self.enabled {
            return Some(line);
        }

        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !self.comment_marker.is_empty() && line.starts_with(self.comment_marker.as_str()) {
            return None;
        }
        Some(line)
    }
}

/// Read all lines of a text file, filtered according to `filter`
pub fn file_lines<P: AsRef<Path>>(path: P, filter: &LineFilter) -> Result<Vec<String>, MidError> {
    let file = File::open(path.as_ref())?;
    lines_from_reader(BufReader::new(file), filter)
}

/// Read all lines from a reader, filtered according to `filter`
pub fn lines_from_reader<R: BufRead>(reader: R, filter: &LineFilter) -> Result<Vec<String>, MidError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(kept) = filter.apply(&line) {
            lines.push(kept.to_string());
        }
    }
    Ok(lines)
}
