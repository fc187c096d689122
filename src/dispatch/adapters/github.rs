//! GitHub Actions `workflow_dispatch` adapter.

use crate::dispatch::{
    domain::DispatchRequest,
    ports::{DispatchError, DispatchResult, WorkflowDispatcher},
};
use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde_json::{Map, Value};

/// Media type GitHub expects on REST calls.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Dispatcher issuing `POST /repos/{repo}/actions/workflows/{workflow}/dispatches`.
///
/// A 204 response is the only success signal; the endpoint returns no body.
#[derive(Debug, Clone)]
pub struct GithubWorkflowDispatcher {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

impl GithubWorkflowDispatcher {
    /// Creates a dispatcher for the given API base URL and bearer credential.
    #[must_use]
    pub fn new(client: reqwest::Client, api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let normalized = api_base.into().trim_end_matches('/').to_owned();
        Self {
            client,
            api_base: normalized,
            token: token.into(),
        }
    }

    fn endpoint(&self, request: &DispatchRequest) -> String {
        format!(
            "{}/repos/{}/actions/workflows/{}/dispatches",
            self.api_base,
            request.target().repository(),
            request.target().workflow()
        )
    }
}

/// Builds the JSON body for a dispatch request.
fn dispatch_payload(request: &DispatchRequest) -> Value {
    let mut inputs = Map::new();
    for (key, value) in request.inputs() {
        inputs.insert(key.clone(), Value::String(value.clone()));
    }
    let mut body = Map::new();
    body.insert(
        "ref".to_owned(),
        Value::String(request.target().git_ref().as_str().to_owned()),
    );
    body.insert("inputs".to_owned(), Value::Object(inputs));
    Value::Object(body)
}

#[async_trait]
impl WorkflowDispatcher for GithubWorkflowDispatcher {
    async fn dispatch(&self, request: &DispatchRequest) -> DispatchResult<()> {
        let response = self
            .client
            .post(self.endpoint(request))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .json(&dispatch_payload(request))
            .send()
            .await
            .map_err(DispatchError::transport)?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(DispatchError::UnexpectedStatus(status.as_u16())),
        }
    }
}
