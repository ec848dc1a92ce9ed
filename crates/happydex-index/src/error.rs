use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A source name outside the fixed set was passed to the string entry point.
    #[error("invalid source: {0}")]
    InvalidSource(String),
}
