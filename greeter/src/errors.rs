use std::io;
use thiserror::Error;

/// Errors raised while writing the greeting.
#[derive(Debug, Error)]
pub enum GreeterError {
    /// The output sink rejected the write or flush.
    #[error("io: {0}")]
    Io(#[from] io::Error),
}

pub type GreeterResult<T> = Result<T, GreeterError>;
