//! Domain model for external workflow dispatch.
//!
//! Models the validated dispatch target, the per-trigger request payload,
//! and the outcome distinction between an actual dispatch and the
//! "no credential configured" no-op.

mod error;
mod request;
mod target;

pub use error::DispatchDomainError;
pub use request::{DispatchOutcome, DispatchRequest, TriggerSource};
pub use target::{DispatchTarget, GitRef, RepositorySlug, WorkflowFile};
