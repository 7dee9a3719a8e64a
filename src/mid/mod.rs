//! # MID tables
//!
//! A [`MidTable`] holds everything known about one compound of interest: the
//! definition read from the ion definitions file (compound name, retention
//! time, diagnostic ion and MDV size) and, once data files have been
//! processed upstream, one mass isotopomer distribution vector per data file
//! together with any warnings raised along the way.

mod error;
mod table;


pub use error::MidError;
pub use table::MidTable;
