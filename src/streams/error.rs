use thiserror::Error;

/// A data line whose selected field could not be turned into a value.
///
/// These are local to one line: the line is skipped and reading continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: '{field}' is not a number")]
    NotNumeric { line: u64, field: String },

    #[error("line {line}: '{value}' is not a finite number")]
    NonFinite { line: u64, value: String },

    #[error("line {line}: column {column} missing, row has {found} field(s)")]
    MissingField { line: u64, column: usize, found: usize },
}

impl ParseError {
    pub fn line(&self) -> u64 {
        match self {
            ParseError::NotNumeric { line, .. }
            | ParseError::NonFinite { line, .. }
            | ParseError::MissingField { line, .. } => *line,
        }
    }
}

#[derive(Debug, Error)]
pub enum StreamError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StreamError {
    /// Parse errors skip one line; I/O errors end the stream.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StreamError::Parse(_))
    }
}
