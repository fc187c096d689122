//! In-memory sheet reader for tests.

use crate::sheet::{
    domain::SheetSnapshot,
    ports::{SheetReadError, SheetReadResult, SheetReader},
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ReaderState {
    snapshot: SheetSnapshot,
    queued_failures: VecDeque<SheetReadError>,
    reads: usize,
}

/// Thread-safe in-memory sheet reader with failure injection.
#[derive(Debug, Clone, Default)]
pub struct InMemorySheetReader {
    state: Arc<Mutex<ReaderState>>,
}

impl InMemorySheetReader {
    /// Creates a reader serving the given snapshot.
    #[must_use]
    pub fn new(snapshot: SheetSnapshot) -> Self {
        let reader = Self::default();
        reader.set_snapshot(snapshot);
        reader
    }

    /// Replaces the served snapshot.
    pub fn set_snapshot(&self, snapshot: SheetSnapshot) {
        if let Ok(mut state) = self.state.lock() {
            state.snapshot = snapshot;
        }
    }

    /// Queues an error served by the next read instead of a snapshot.
    pub fn fail_next(&self, error: SheetReadError) {
        if let Ok(mut state) = self.state.lock() {
            state.queued_failures.push_back(error);
        }
    }

    /// Returns how many reads have been served, failures included.
    #[must_use]
    pub fn read_count(&self) -> usize {
        self.state.lock().map(|state| state.reads).unwrap_or_default()
    }
}

#[async_trait]
impl SheetReader for InMemorySheetReader {
    async fn snapshot(&self) -> SheetReadResult<SheetSnapshot> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| SheetReadError::Unavailable(err.to_string()))?;
        state.reads += 1;
        if let Some(error) = state.queued_failures.pop_front() {
            return Err(error);
        }
        Ok(state.snapshot.clone())
    }
}
