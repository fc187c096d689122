//! Google Sheets `values` API adapter.

use crate::sheet::{
    domain::SheetSnapshot,
    ports::{SheetReadError, SheetReadResult, SheetReader},
};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Wire shape of a `values.get` response.
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Reader issuing `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// Uses API-key authentication, which is sufficient for the read-only access
/// this crate needs.
#[derive(Debug, Clone)]
pub struct GoogleSheetsReader {
    client: reqwest::Client,
    api_base: String,
    spreadsheet_id: String,
    range: String,
    api_key: String,
}

impl GoogleSheetsReader {
    /// Creates a reader for one spreadsheet range.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        api_base: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        range: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let normalized = api_base.into().trim_end_matches('/').to_owned();
        Self {
            client,
            api_base: normalized,
            spreadsheet_id: spreadsheet_id.into(),
            range: range.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.api_base, self.spreadsheet_id, self.range
        )
    }
}

/// Renders one wire cell as text.
///
/// The API returns formatted strings for text cells; numeric cells arrive as
/// JSON numbers and are rendered through their canonical representation.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl SheetReader for GoogleSheetsReader {
    async fn snapshot(&self) -> SheetReadResult<SheetSnapshot> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(SheetReadError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetReadError::UnexpectedStatus(status.as_u16()));
        }

        let range: ValueRange = response
            .json()
            .await
            .map_err(|err| SheetReadError::MalformedResponse(err.to_string()))?;

        let rows = range
            .values
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        Ok(SheetSnapshot::from_rows(rows))
    }
}
