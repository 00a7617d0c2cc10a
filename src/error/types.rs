use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, AlcoveError>;

/// Errors surfaced by the crate's ambient surface.
///
/// The layout algorithms themselves are total functions and never fail;
/// the variants here cover logging sinks and I/O around them.
#[derive(Debug, Error)]
pub enum AlcoveError {
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
