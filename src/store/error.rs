//! Score store error type.

use derive_more::{Display, Error};

/// Store error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
