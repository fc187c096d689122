//! Error types for dispatch domain validation.

use thiserror::Error;

/// Errors returned while constructing dispatch domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchDomainError {
    /// The repository slug does not follow `owner/repo` format.
    #[error("invalid repository slug '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// The workflow file name is empty after trimming.
    #[error("workflow file name must not be empty")]
    EmptyWorkflow,

    /// The git ref is empty or contains whitespace.
    #[error("invalid git ref '{0}'")]
    InvalidGitRef(String),

    /// A dispatch input key is empty after trimming.
    #[error("dispatch input key must not be empty")]
    EmptyInputKey,
}
