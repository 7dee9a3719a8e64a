/// Errors that can occur while parsing definitions or writing MID tables
#[derive(Debug, thiserror::Error)]
pub enum MidError {
    /// I/O error reading an input file or writing an output destination
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error while writing MDV rows.
    /// I/O failures inside the CSV writer are reported as [`MidError::Io`].
    #[error("CSV writing error: {0}")]
    Csv(#[source] csv::Error),

    /// Malformed line in an ion definitions file
    #[error("Invalid line in {file}: '{line}': {reason}")]
    Format {
        /// File the line was read from
        file: String,
        /// Literal text of the offending line
        line: String,
        /// What was wrong with it
        reason: String,
    },

    /// Time string that could not be converted to seconds
    #[error("Invalid time string '{input}': {reason}")]
    InvalidTime {
        /// The rejected time string
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// MID table constructed with invalid attributes
    #[error("Invalid MID table: {0}")]
    InvalidTable(String),

    /// MDV length does not match the table's MDV size
    #[error("MDV for '{compound}' has {actual} values, expected {expected}")]
    MdvSizeMismatch {
        /// Compound the MDV was assigned to
        compound: String,
        /// MDV size declared by the table
        expected: usize,
        /// Length of the rejected vector
        actual: usize,
    },
}

impl From<csv::Error> for MidError {
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return Self::Csv(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => Self::Io(e),
            kind => Self::Io(std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", kind))),
        }
    }
}

impl MidError {
    /// Attach file and line context to a conversion failure
    pub(crate) fn format(file: impl Into<String>, line: impl Into<String>, reason: impl ToString) -> Self {
        Self::Format {
            file: file.into(),
            line: line.into(),
            reason: reason.to_string(),
        }
    }
}
