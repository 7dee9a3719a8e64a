//! # midkit - MID table input and reporting
//!
//! `midkit` reads the plain-text inputs of a mass isotopomer distribution (MID)
//! analysis and writes the accumulated MID tables back out as text.
//!
//! ## Inputs
//!
//! - **Ion definitions**: one compound of interest per line, as
//!   `compound_name,retention_time,diagnostic_ion,mdv_size`.
//!   The retention time is seconds, or carries a unit (`10.2m`, `"1 min"`).
//! - **Data file list**: one raw data file name per line.
//!
//! Blank lines and `#` comments are ignored in both.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use midkit::defs::{parse_data_defs, parse_ion_defs};
//! use midkit::report::{write_mid_tables_to_path, WriteMode};
//!
//! let mut tables = parse_ion_defs("ion_defs.txt")?;
//! let data_files = parse_data_defs("data_files.txt")?;
//!
//! // MDVs come from upstream peak integration
//! for table in &mut tables {
//!     for data_file in &data_files {
//!         let mdv = vec![1.0 / table.mdv_size() as f64; table.mdv_size()];
//!         table.set_values(data_file.as_str(), mdv)?;
//!     }
//! }
//!
//! write_mid_tables_to_path(&tables, "mid_tables.csv", WriteMode::Append)?;
//! # Ok::<(), midkit::MidError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io`]: filtered line reading
//! - [`time`]: retention time strings to seconds
//! - [`defs`]: ion definition and data file list parsers
//! - [`mid`]: the [`MidTable`] record
//! - [`report`]: writing MID tables through the [`report::MidWrite`] trait

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod defs;
pub mod io;
pub mod mid;
pub mod report;
pub mod time;

pub use mid::{MidError, MidTable};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::defs::{parse_data_defs, parse_data_defs_with, parse_ion_defs, parse_ion_defs_with};
    pub use crate::io::{file_lines, LineFilter};
    pub use crate::mid::{MidError, MidTable};
    pub use crate::report::{write_mid_tables, write_mid_tables_to_path, MidWrite, WriteMode};
    pub use crate::time::time_str_secs;
}
