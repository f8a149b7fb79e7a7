/// Error types for dnascout.
///
/// The matchers themselves never fail: a pattern longer than the text is a
/// zero count, not an error. Everything here comes from the collaborators
/// around them (loading sequences, validating input, reading configuration).
///
/// ```rust,ignore
/// match search(&config) {
///     Ok(outcome) => println!("The pattern was found: {} times", outcome.matches),
///     Err(SearchError::FileNotFound(path)) => // Handle missing file,
///     Err(SearchError::EmptyPattern) => // Nothing to search for,
///     Err(e) => // Handle other errors
/// }
/// ```
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),
    #[error("Empty pattern")]
    EmptyPattern,
    #[error("DNA sequence too large: {path} reached the limit of {limit} symbols")]
    SequenceTooLarge { path: PathBuf, limit: usize },
    #[error("Pattern sequence too large: {path} reached the limit of {limit} symbols")]
    PatternTooLarge { path: PathBuf, limit: usize },
    #[error("Invalid algorithm: {0}. Use bf for Brute Force or kr for Karp-Rabin")]
    InvalidAlgorithm(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Failed to read {path}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl SearchError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound(path.into())
    }

    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        Self::PermissionDenied(path.into())
    }

    pub fn sequence_too_large(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self::SequenceTooLarge {
            path: path.into(),
            limit,
        }
    }

    pub fn pattern_too_large(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self::PatternTooLarge {
            path: path.into(),
            limit,
        }
    }

    pub fn invalid_algorithm(name: impl Into<String>) -> Self {
        Self::InvalidAlgorithm(name.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Maps an I/O error raised while opening or reading `path` onto the
    /// matching variant. The path is kept in every case.
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => Self::permission_denied(path),
            _ => Self::ReadError {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}
