//! TOML configuration file support.
//!
//! Instead of passing flags on every run, settings can live in a config file:
//!
//! ```toml
//! # midkit.toml
//! [input]
//! comment_marker = "#"
//! filter = true
//!
//! [output]
//! truncate = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use midkit::io::LineFilter;

/// Root configuration structure for midkit.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// How definition files are read.
    #[serde(default)]
    pub input: InputConfig,

    /// How reports are written.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Settings for reading ion definition and data list files.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// Marker that starts a comment line.
    pub comment_marker: Option<String>,

    /// Skip blank and comment lines.
    pub filter: Option<bool>,
}

/// Settings for writing MID table reports.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Overwrite the report instead of appending to it.
    pub truncate: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Line filter for input files, falling back to library defaults.
    pub fn line_filter(&self) -> LineFilter {
        let defaults = LineFilter::default();
        LineFilter {
            enabled: self.input.filter.unwrap_or(defaults.enabled),
            comment_marker: self
                .input
                .comment_marker
                .clone()
                .unwrap_or(defaults.comment_marker),
        }
    }
}
