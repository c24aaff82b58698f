//! Custom error types for dataset preparation

use std::fmt;
use std::io;

/// Error types for sorting, cropping and conversion
#[derive(Debug)]
pub enum MiasError {
    /// I/O error
    IoError(io::Error),
    /// Missing or malformed run configuration (folder, metadata, targets)
    InvalidInput(String),
    /// Job file could not be read or parsed
    ConfigError(String),
    /// Directory listing could not be produced
    EnumerationFailed { folder: String, reason: String },
    /// A file could not be decoded as an image
    DecodeFailed { file: String, reason: String },
    /// Crop bounds are degenerate or outside the image
    GeometryError { file: String, reason: String },
    /// A destination could not be written
    WriteFailed { path: String, reason: String },
}

impl fmt::Display for MiasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiasError::IoError(e) => write!(f, "I/O error: {}", e),
            MiasError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            MiasError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MiasError::EnumerationFailed { folder, reason } =>
                write!(f, "Cannot list folder {}: {}", folder, reason),
            MiasError::DecodeFailed { file, reason } =>
                write!(f, "Cannot decode {}: {}", file, reason),
            MiasError::GeometryError { file, reason } =>
                write!(f, "Invalid crop geometry for {}: {}", file, reason),
            MiasError::WriteFailed { path, reason } =>
                write!(f, "Cannot write {}: {}", path, reason),
        }
    }
}

impl std::error::Error for MiasError {}

impl From<io::Error> for MiasError {
    fn from(error: io::Error) -> Self {
        MiasError::IoError(error)
    }
}

/// Result type for dataset operations
pub type MiasResult<T> = Result<T, MiasError>;
