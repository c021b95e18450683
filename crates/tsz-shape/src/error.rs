//! Errors raised while resolving a type graph.

use std::path::PathBuf;

/// Failure of a resolution pass or driver run.
///
/// Resolution has no partial recovery: the first error aborts the whole
/// invocation.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The node matched none of the shape categories.
    #[error("unsupported type shape: '{name}'")]
    UnsupportedTypeShape { name: String },

    /// Nesting went deeper than the configured limit.
    #[error("type nesting exceeded {limit} levels while resolving '{name}'")]
    DepthExceeded { name: String, limit: u32 },

    /// The oracle reported an array without an element type.
    #[error("array type '{name}' has no element type")]
    MissingElementType { name: String },

    /// A value-less literal carried no `true`/`false` marker.
    #[error("literal type '{name}' has neither a value nor a boolean marker")]
    MissingBooleanMarker { name: String },

    /// The driver asked for a file the session was not opened with.
    #[error("file '{}' is not part of the session", .file.display())]
    FileNotInSession { file: PathBuf },

    /// The frontend could not open a session.
    #[error("frontend error: {0}")]
    Frontend(String),

    /// A type graph snapshot could not be read.
    #[error("invalid type graph snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A type graph snapshot parsed but does not describe a usable graph.
    #[error("invalid type graph snapshot: {reason}")]
    InvalidSnapshot { reason: String },
}

pub type Result<T, E = ResolveError> = std::result::Result<T, E>;
