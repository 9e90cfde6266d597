use thiserror::Error as ThisError;

///
/// HashError
///
/// Precondition violations. Arithmetic overflow inside the engine is
/// modular by definition and never surfaces here.
///

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum HashError {
    #[error("word sequence is empty, there is no tail word to mix")]
    EmptyWords,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, HashError>;
