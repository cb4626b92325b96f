use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregatorError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
