//! Recording dispatcher for tests.

use crate::dispatch::{
    domain::DispatchRequest,
    ports::{DispatchError, DispatchResult, WorkflowDispatcher},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct RecordingState {
    requests: Vec<DispatchRequest>,
    response: Option<DispatchError>,
}

/// Dispatcher that records every request and answers with a scripted result.
///
/// Answers success unless a failure has been scripted with
/// [`RecordingDispatcher::fail_with`].
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    state: Arc<Mutex<RecordingState>>,
}

impl RecordingDispatcher {
    /// Creates a dispatcher that accepts every request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the error every subsequent dispatch call returns.
    pub fn fail_with(&self, error: DispatchError) {
        if let Ok(mut state) = self.state.lock() {
            state.response = Some(error);
        }
    }

    /// Returns the requests recorded so far.
    #[must_use]
    pub fn recorded(&self) -> Vec<DispatchRequest> {
        self.state
            .lock()
            .map(|state| state.requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl WorkflowDispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: &DispatchRequest) -> DispatchResult<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|err| DispatchError::transport(std::io::Error::other(err.to_string())))?;
        state.requests.push(request.clone());
        state.response.clone().map_or(Ok(()), Err)
    }
}
