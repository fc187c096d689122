//! Adapter implementations of the refresh ports.

pub mod file;
pub mod log;
pub mod memory;

pub use file::FileStateStore;
pub use log::{LogNotifier, LogStatusSink};
pub use memory::{
    InMemoryFlagStore, InMemoryTriggerRegistry, RecordingNotifier, RecordingStatusSink,
};
