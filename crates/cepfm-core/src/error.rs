//! Error types for `cepfm-core`.
//!
//! All fallible operations in the engine return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all engine operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The destination path is already occupied. Mutating operations refuse
    /// to overwrite and surface this instead.
    #[error("destination already exists: {0}")]
    AlreadyExists(PathBuf),

    /// Source and destination resolve to the same path; no I/O was performed.
    #[error("source and destination are the same: {0}")]
    SameLocation(PathBuf),

    /// A scan was cancelled before it completed.
    #[error("operation cancelled")]
    Cancelled,

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `cepfm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
