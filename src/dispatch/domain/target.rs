//! Validated identifiers for the external workflow dispatch target.

use super::DispatchDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized repository identifier in `owner/repo` format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositorySlug(String);

impl RepositorySlug {
    /// Creates a validated repository slug.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchDomainError::InvalidRepository`] if the value does
    /// not contain exactly one slash-delimited owner and repository segment.
    pub fn new(value: impl Into<String>) -> Result<Self, DispatchDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        let Some((owner, repo)) = normalized.split_once('/') else {
            return Err(DispatchDomainError::InvalidRepository(raw));
        };
        let is_valid = !owner.is_empty()
            && !repo.is_empty()
            && !repo.contains('/')
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(DispatchDomainError::InvalidRepository(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the slug as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RepositorySlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RepositorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow file name within the repository (for example `scrape.yml`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowFile(String);

impl WorkflowFile {
    /// Creates a validated workflow file name.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchDomainError::EmptyWorkflow`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DispatchDomainError> {
        let normalized = value.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(DispatchDomainError::EmptyWorkflow);
        }
        Ok(Self(normalized))
    }

    /// Returns the workflow file name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Git ref the workflow is dispatched against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GitRef(String);

impl GitRef {
    /// Creates a validated git ref.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchDomainError::InvalidGitRef`] when the value is empty
    /// after trimming or contains whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DispatchDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
            return Err(DispatchDomainError::InvalidGitRef(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the ref as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fully-qualified dispatch target: repository, workflow file, and git ref.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchTarget {
    repository: RepositorySlug,
    workflow: WorkflowFile,
    git_ref: GitRef,
}

impl DispatchTarget {
    /// Creates a dispatch target from validated parts.
    #[must_use]
    pub const fn new(repository: RepositorySlug, workflow: WorkflowFile, git_ref: GitRef) -> Self {
        Self {
            repository,
            workflow,
            git_ref,
        }
    }

    /// Creates a dispatch target from raw configuration strings.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchDomainError`] when any part fails validation.
    pub fn from_parts(
        repository: impl Into<String>,
        workflow: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Result<Self, DispatchDomainError> {
        Ok(Self::new(
            RepositorySlug::new(repository)?,
            WorkflowFile::new(workflow)?,
            GitRef::new(git_ref)?,
        ))
    }

    /// Returns the repository slug.
    #[must_use]
    pub const fn repository(&self) -> &RepositorySlug {
        &self.repository
    }

    /// Returns the workflow file name.
    #[must_use]
    pub const fn workflow(&self) -> &WorkflowFile {
        &self.workflow
    }

    /// Returns the git ref.
    #[must_use]
    pub const fn git_ref(&self) -> &GitRef {
        &self.git_ref
    }
}
