//! # MID table reports
//!
//! Every record knows how to serialize itself through [`MidWrite`]; the
//! functions here only decide ordering and the destination. Records are
//! written in sequence order to a single destination. Writing stops at the
//! first failure and whatever was already written stays in the destination.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};

use crate::mid::MidError;

/// A record that can append its text representation to an output
pub trait MidWrite {
    /// Write this record, including any attached warnings, to `out`
    fn write(&self, out: &mut dyn Write) -> Result<(), MidError>;
}

/// How an output file is opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Create the file if needed and append to its end
    #[default]
    Append,
    /// Start a fresh file, discarding previous content
    Truncate,
}

/// Write each table, in order, to `out`
pub fn write_mid_tables<T: MidWrite>(tables: &[T], out: &mut dyn Write) -> Result<(), MidError> {
    for (i, table) in tables.iter().enumerate() {
        debug!("Writing MID table {} of {}", i + 1, tables.len());
        table.write(out)?;
    }
    Ok(())
}

/// Write each table, in order, to the file at `path`
pub fn write_mid_tables_to_path<T: MidWrite, P: AsRef<Path>>(
    tables: &[T],
    path: P,
    mode: WriteMode,
) -> Result<(), MidError> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Append => options.create(true).append(true),
        WriteMode::Truncate => options.create(true).write(true).truncate(true),
    };

    let mut out = BufWriter::new(options.open(path)?);
    write_mid_tables(tables, &mut out)?;
    out.flush()?;

    info!("Wrote {} MID tables to {}", tables.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Named(&'static str);

    impl MidWrite for Named {
        fn write(&self, out: &mut dyn Write) -> Result<(), MidError> {
            writeln!(out, "{}", self.0)?;
            Ok(())
        }
    }

    /// Accepts a fixed number of bytes, then refuses
    struct LimitedSink {
        buf: Vec<u8>,
        limit: usize,
    }

    impl Write for LimitedSink {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            if self.buf.len() + data.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.buf.extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_in_order() {
        let tables = [Named("A"), Named("B"), Named("C")];
        let mut out = Vec::new();
        write_mid_tables(&tables, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "A\nB\nC\n");
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let tables: [Named; 0] = [];
        let mut out = Vec::new();
        write_mid_tables(&tables, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_stops_at_first_failure() {
        let tables = [Named("A"), Named("B"), Named("C")];
        let mut sink = LimitedSink {
            buf: Vec::new(),
            limit: 4,
        };
        let err = write_mid_tables(&tables, &mut sink).unwrap_err();
        assert!(matches!(err, MidError::Io(_)));
        assert_eq!(sink.buf, b"A\nB\n");
    }
}
