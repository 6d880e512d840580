use std::io;

/// Represents the different types of errors that can occur while loading an
/// intent table or building a classifier.
///
/// Classification itself never fails; every variant here is a startup-time error.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The intent table exists but could not be read
    #[error("Failed to read intent table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The intent table is not valid JSON
    #[error("Failed to parse intent table {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The intent table is valid JSON but not an object of string lists
    #[error("Invalid intent table format: {0}")]
    InvalidFormat(String),
    /// Error occurred due to invalid intent definitions
    #[error("Validation error: {0}")]
    ValidationError(String),
}
