use std::io;
use std::path::Path;

use crate::domain::Mode;

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors raised by the record reader, writer and the mode-gated facade
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    /// Opening a missing file for reading
    #[error("Resource not found: {path}")]
    ResourceNotFound { path: String },
    /// Facade call that does not match the mode it was opened in
    #[error("This instance is not in {expected} mode")]
    WrongMode { expected: Mode },
    /// Component-level read or write without an open handle
    #[error("File is not open (attempted {operation})")]
    NotOpen { operation: &'static str },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
    #[error("Configuration validation failed: {message}")]
    ValidationError { message: String },
}

impl RecordError {
    /// Map a failure to open `path` for reading.
    ///
    /// `NotFound` becomes [`RecordError::ResourceNotFound`]; every other kind is
    /// kept as the source of [`RecordError::Io`].
    pub fn from_read_open(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => RecordError::ResourceNotFound {
                path: path.display().to_string(),
            },
            _ => Self::io(err, path),
        }
    }

    /// Wrap any other I/O failure on `path`, keeping the error as the source
    pub fn io(err: io::Error, path: &Path) -> Self {
        RecordError::Io {
            path: path.display().to_string(),
            source: err,
        }
    }

    /// The underlying I/O error kind, when there is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            RecordError::ResourceNotFound { .. } => Some(io::ErrorKind::NotFound),
            RecordError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
