use std::path::PathBuf;

use ctl_types::Digest;

/// Errors from snapshot persistence.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No state file exists at the given path.
    #[error("state file not found: {0}")]
    StateMissing(PathBuf),

    /// The state file is malformed or does not match the declared schema.
    #[error("schema error in {path}: {reason}")]
    Schema { path: PathBuf, reason: String },

    /// The loaded snapshot's version string is not supported.
    #[error("unsupported state version {found:?} (expected {expected:?})")]
    UnsupportedVersion { found: String, expected: String },

    /// The loaded snapshot diverges from the expected commitment.
    #[error("stale snapshot: expected state hash {expected}, found {actual}")]
    Stale { expected: Digest, actual: Digest },

    /// Canonical encoding failed.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
