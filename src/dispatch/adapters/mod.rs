//! Adapter implementations of the dispatch ports.

pub mod github;
pub mod memory;

pub use github::GithubWorkflowDispatcher;
pub use memory::RecordingDispatcher;
