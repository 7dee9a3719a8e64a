use std::io::Write;

use serde::{Deserialize, Serialize};

use super::MidError;
use crate::report::MidWrite;

/// Expected-ion-monitoring specification for one compound, plus the MDVs
/// and warnings accumulated for it across data files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMidTable")]
pub struct MidTable {
    compound_name: String,
    rt: f64,
    diagnostic_ion: i64,
    mdv_size: usize,
    values: Vec<(String, Vec<f64>)>,
    warnings: Vec<String>,
}

/// Unchecked field layout, validated on the way into a [`MidTable`]
#[derive(Deserialize)]
struct RawMidTable {
    compound_name: String,
    rt: f64,
    diagnostic_ion: i64,
    mdv_size: usize,
    #[serde(default)]
    values: Vec<(String, Vec<f64>)>,
    #[serde(default)]
    warnings: Vec<String>,
}

impl TryFrom<RawMidTable> for MidTable {
    type Error = MidError;

    fn try_from(raw: RawMidTable) -> Result<Self, Self::Error> {
        let mut table = MidTable::new(raw.compound_name, raw.rt, raw.diagnostic_ion, raw.mdv_size)?;
        for (data_file, mdv) in raw.values {
            table.set_values(data_file, mdv)?;
        }
        table.warnings = raw.warnings;
        Ok(table)
    }
}

impl MidTable {
    /// Create an empty MID table.
    ///
    /// The compound name must be non-empty, the retention time finite and
    /// non-negative, and the MDV size at least one.
    pub fn new(
        compound_name: impl Into<String>,
        rt: f64,
        diagnostic_ion: i64,
        mdv_size: usize,
    ) -> Result<Self, MidError> {
        let compound_name = compound_name.into();
        if compound_name.trim().is_empty() {
            return Err(MidError::InvalidTable("compound name is empty".to_string()));
        }
        if !rt.is_finite() || rt < 0.0 {
            return Err(MidError::InvalidTable(format!(
                "retention time must be a non-negative number of seconds, got {}",
                rt
            )));
        }
        if mdv_size == 0 {
            return Err(MidError::InvalidTable(format!(
                "MDV size for '{}' must be at least 1",
                compound_name
            )));
        }

        Ok(Self {
            compound_name,
            rt,
            diagnostic_ion,
            mdv_size,
            values: Vec::new(),
            warnings: Vec::new(),
        })
    }

    /// Compound name
    pub fn compound_name(&self) -> &str {
        &self.compound_name
    }

    /// Retention time in seconds
    pub fn rt(&self) -> f64 {
        self.rt
    }

    /// Diagnostic ion m/z
    pub fn diagnostic_ion(&self) -> i64 {
        self.diagnostic_ion
    }

    /// Number of isotopomer channels tracked
    pub fn mdv_size(&self) -> usize {
        self.mdv_size
    }

    /// MDVs keyed by data file name, in the order they were first set
    pub fn values(&self) -> &[(String, Vec<f64>)] {
        &self.values
    }

    /// MDV recorded for a data file, if any
    pub fn get_values(&self, data_file: &str) -> Option<&[f64]> {
        self.values
            .iter()
            .find(|(name, _)| name == data_file)
            .map(|(_, mdv)| mdv.as_slice())
    }

    /// Attached warnings, in the order they were added
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Record the MDV measured in a data file.
    ///
    /// Replaces an earlier MDV for the same file without changing its position.
    pub fn set_values(&mut self, data_file: impl Into<String>, mdv: Vec<f64>) -> Result<(), MidError> {
        if mdv.len() != self.mdv_size {
            return Err(MidError::MdvSizeMismatch {
                compound: self.compound_name.clone(),
                expected: self.mdv_size,
                actual: mdv.len(),
            });
        }

        let data_file = data_file.into();
        match self.values.iter_mut().find(|(name, _)| *name == data_file) {
            Some((_, existing)) => *existing = mdv,
            None => self.values.push((data_file, mdv)),
        }
        Ok(())
    }

    /// Attach a warning, written out with the table
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl MidWrite for MidTable {
    fn write(&self, out: &mut dyn Write) -> Result<(), MidError> {
        writeln!(out, "# {}", self.compound_name)?;
        writeln!(
            out,
            "# rt={:.3} s, ion={}, mdv_size={}",
            self.rt, self.diagnostic_ion, self.mdv_size
        )?;

        {
            let mut rows = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut *out);

            let header = std::iter::once("data_file".to_string())
                .chain((0..self.mdv_size).map(|i| format!("m{}", i)));
            rows.write_record(header)?;

            for (data_file, mdv) in &self.values {
                let record = std::iter::once(data_file.clone())
                    .chain(mdv.iter().map(|v| v.to_string()));
                rows.write_record(record)?;
            }
            rows.flush()?;
        }

        // Continuation lines stay inside the comment block
        for warning in &self.warnings {
            let mut lines = warning.lines();
            writeln!(out, "# WARNING: {}", lines.next().unwrap_or(""))?;
            for line in lines {
                writeln!(out, "#   {}", line)?;
            }
        }
        writeln!(out)?;

        Ok(())
    }
}
