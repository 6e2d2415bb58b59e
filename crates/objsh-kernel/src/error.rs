//! Shell error taxonomy.
//!
//! Every failure a verb can report is recoverable and local to the call:
//! an unresolved path, a refused argument shape, or a structural conflict.
//! Nothing here is fatal to the shell instance, and no verb panics — failure
//! always travels through the return value.

use thiserror::Error;

use objsh_types::ShapeMismatch;

/// Result alias for verb operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Errors reported by shell verbs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Navigation or resolution target absent in both scopes.
    #[error("no such object: {0}")]
    NoSuchObject(String),

    /// A verb was called with an empty path argument.
    #[error("missing operand")]
    MissingOperand,

    /// `mkdir` refuses to overwrite an existing member.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// A context that must be a mapping resolved to something else.
    #[error("not a mapping: {0}")]
    NotAMapping(String),

    /// `cp` source unresolved in both scopes.
    #[error("source does not exist: {0}")]
    SourceMissing(String),

    /// An intermediate path needed for a mutation could not be resolved.
    #[error("unresolved path: {0}")]
    Unresolved(String),

    /// Tandem batch arguments with differing shapes or lengths.
    #[error(transparent)]
    BatchShape(#[from] ShapeMismatch),
}
