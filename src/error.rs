use crate::aggregation::AggregatorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that end a filtering run.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error(transparent)]
    Aggregator(#[from] AggregatorError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no header line", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("column {column} out of range: header has {available} field(s)")]
    ColumnOutOfRange { column: usize, available: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FilterError {
    pub fn file_access<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        FilterError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
