//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Board configuration error with location tracking.
///
/// Raised when a board is requested with a size that cannot be tiled
/// with pairs. The session that existed before the request is left as is.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Configuration error: {} at {}:{}", message, file, line)]
pub struct ConfigurationError {
    /// Error message.
    pub message: String,
    /// Requested board size.
    pub size: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigurationError {
    /// Creates a new configuration error for the requested size.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(size: usize, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            size,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
