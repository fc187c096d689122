//! Configuration loading for services and the CLI.
//!
//! Configuration lives in one JSON file. Only the dispatch target and the
//! worksheet source are mandatory; everything else defaults to the values
//! the external job was built around. A representative file:
//!
//! ```json
//! {
//!   "github": {
//!     "repository": "acme/scraper",
//!     "workflow": "scrape.yml",
//!     "token": "ghp_..."
//!   },
//!   "sheet": {
//!     "spreadsheet_id": "1AbC...",
//!     "api_key": "AIza..."
//!   }
//! }
//! ```

use crate::dispatch::domain::{DispatchDomainError, DispatchTarget};
use crate::sheet::domain::{ColumnLayout, RowMarkers, SheetDomainError};
use crate::watch::domain::{FreshnessWindow, PollBudget, WatchDomainError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding the configured dispatch credential.
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// The file is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),

    /// The dispatch target failed validation.
    #[error(transparent)]
    Dispatch(#[from] DispatchDomainError),

    /// The worksheet layout or markers failed validation.
    #[error(transparent)]
    Sheet(#[from] SheetDomainError),

    /// The poll settings failed validation.
    #[error(transparent)]
    Watch(#[from] WatchDomainError),
}

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetwatchConfig {
    /// External workflow dispatch target.
    pub github: GithubSection,
    /// Worksheet source and interpretation.
    pub sheet: SheetSection,
    /// Poll cadence and windows.
    #[serde(default)]
    pub poll: PollSection,
    /// Path of the JSON file backing the flag and observer state.
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
}

/// Dispatch target section.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubSection {
    /// Repository in `owner/repo` format.
    pub repository: String,
    /// Workflow file name (for example `scrape.yml`).
    pub workflow: String,
    /// Git ref the workflow runs against.
    #[serde(default = "default_git_ref")]
    pub git_ref: String,
    /// API base URL.
    #[serde(default = "default_github_api_base")]
    pub api_base: String,
    /// Bearer credential. Without one, refresh cycles run untriggered.
    #[serde(default)]
    pub token: Option<String>,
}

/// Worksheet source section.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetSection {
    /// Spreadsheet identifier.
    pub spreadsheet_id: String,
    /// A1-notation range covering the job's columns.
    #[serde(default = "default_range")]
    pub range: String,
    /// API key for read access.
    pub api_key: String,
    /// API base URL.
    #[serde(default = "default_sheets_api_base")]
    pub api_base: String,
    /// 0-based input URL column.
    #[serde(default)]
    pub url_column: usize,
    /// 0-based last-processed timestamp column.
    #[serde(default = "default_timestamp_column")]
    pub timestamp_column: usize,
    /// 0-based result text column.
    #[serde(default = "default_result_column")]
    pub result_column: usize,
    /// Substring identifying tracked URLs.
    #[serde(default = "default_url_marker")]
    pub url_marker: String,
    /// Substring identifying processed rows.
    #[serde(default = "default_success_marker")]
    pub success_marker: String,
}

/// Poll cadence section.
#[derive(Debug, Clone, Deserialize)]
pub struct PollSection {
    /// Seconds between watch attempts.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Wait-time ceiling for one watch invocation, in seconds.
    #[serde(default = "default_max_wait_secs")]
    pub max_wait_secs: u64,
    /// Lookback window classifying a row as fresh, in seconds.
    #[serde(default = "default_freshness_window_secs")]
    pub freshness_window_secs: u64,
    /// Settle delay between a qualifying edit and its refresh, in seconds.
    #[serde(default = "default_trigger_delay_secs")]
    pub trigger_delay_secs: u64,
}

impl Default for PollSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_wait_secs: default_max_wait_secs(),
            freshness_window_secs: default_freshness_window_secs(),
            trigger_delay_secs: default_trigger_delay_secs(),
        }
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from("sheetwatch_state.json")
}

fn default_git_ref() -> String {
    "main".to_owned()
}

fn default_github_api_base() -> String {
    "https://api.github.com".to_owned()
}

fn default_range() -> String {
    "Sheet1!A:L".to_owned()
}

fn default_sheets_api_base() -> String {
    "https://sheets.googleapis.com".to_owned()
}

const fn default_timestamp_column() -> usize {
    10
}

const fn default_result_column() -> usize {
    11
}

fn default_url_marker() -> String {
    "instagram.com".to_owned()
}

fn default_success_marker() -> String {
    "Fresh Data".to_owned()
}

const fn default_interval_secs() -> u64 {
    10
}

const fn default_max_wait_secs() -> u64 {
    120
}

const fn default_freshness_window_secs() -> u64 {
    300
}

const fn default_trigger_delay_secs() -> u64 {
    2
}

impl SheetwatchConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] when the file
    /// is unreadable or malformed.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Self::from_json(&raw)
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON does not match the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }

    /// Returns the validated dispatch target.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Dispatch`] when the target fails validation.
    pub fn dispatch_target(&self) -> Result<DispatchTarget, ConfigError> {
        Ok(DispatchTarget::from_parts(
            self.github.repository.clone(),
            self.github.workflow.clone(),
            self.github.git_ref.clone(),
        )?)
    }

    /// Returns the dispatch credential, preferring [`GITHUB_TOKEN_ENV`].
    ///
    /// Blank values count as absent.
    #[must_use]
    pub fn resolved_token(&self) -> Option<String> {
        std::env::var(GITHUB_TOKEN_ENV)
            .ok()
            .or_else(|| self.github.token.clone())
            .filter(|token| !token.trim().is_empty())
    }

    /// Returns the validated column layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Sheet`] when two roles share a column.
    pub fn column_layout(&self) -> Result<ColumnLayout, ConfigError> {
        Ok(ColumnLayout::new(
            self.sheet.url_column,
            self.sheet.timestamp_column,
            self.sheet.result_column,
        )?)
    }

    /// Returns the validated row markers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Sheet`] when a marker is blank.
    pub fn markers(&self) -> Result<RowMarkers, ConfigError> {
        Ok(RowMarkers::new(
            self.sheet.url_marker.clone(),
            self.sheet.success_marker.clone(),
        )?)
    }

    /// Returns the validated poll budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Watch`] when the interval is zero.
    pub fn poll_budget(&self) -> Result<PollBudget, ConfigError> {
        Ok(PollBudget::from_window(
            Duration::from_secs(self.poll.max_wait_secs),
            Duration::from_secs(self.poll.interval_secs),
        )?)
    }

    /// Returns the validated freshness window.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Watch`] when the window is out of range.
    pub fn freshness_window(&self) -> Result<FreshnessWindow, ConfigError> {
        Ok(FreshnessWindow::new(Duration::from_secs(
            self.poll.freshness_window_secs,
        ))?)
    }

    /// Returns the edit-trigger settle delay.
    #[must_use]
    pub const fn trigger_delay(&self) -> Duration {
        Duration::from_secs(self.poll.trigger_delay_secs)
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::SheetwatchConfig;

    const MINIMAL: &str = r#"{
        "github": {"repository": "acme/scraper", "workflow": "scrape.yml"},
        "sheet": {"spreadsheet_id": "sheet-id", "api_key": "key"}
    }"#;

    #[test]
    fn minimal_config_takes_defaults() {
        let config = SheetwatchConfig::from_json(MINIMAL).expect("valid config");

        assert_eq!(config.github.git_ref, "main");
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.sheet.range, "Sheet1!A:L");
        assert_eq!(config.sheet.timestamp_column, 10);
        assert_eq!(config.sheet.result_column, 11);
        assert_eq!(config.poll.interval_secs, 10);
        assert_eq!(config.poll.max_wait_secs, 120);
        assert_eq!(config.poll.freshness_window_secs, 300);
    }

    #[test]
    fn derived_values_validate() {
        let config = SheetwatchConfig::from_json(MINIMAL).expect("valid config");

        let target = config.dispatch_target().expect("valid target");
        assert_eq!(target.repository().as_str(), "acme/scraper");
        let budget = config.poll_budget().expect("valid budget");
        assert_eq!(budget.max_attempts(), 12);
        let layout = config.column_layout().expect("valid layout");
        assert_eq!(layout.url_column(), 0);
        config.markers().expect("valid markers");
        config.freshness_window().expect("valid window");
    }

    #[test]
    fn blank_configured_token_counts_as_absent() {
        if std::env::var(super::GITHUB_TOKEN_ENV).is_ok() {
            // The ambient override takes precedence; nothing to assert here.
            return;
        }
        let raw = r#"{
            "github": {"repository": "acme/scraper", "workflow": "scrape.yml", "token": "  "},
            "sheet": {"spreadsheet_id": "sheet-id", "api_key": "key"}
        }"#;
        let config = SheetwatchConfig::from_json(raw).expect("valid config");
        assert_eq!(config.resolved_token(), None);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(SheetwatchConfig::from_json("{not json").is_err());
    }
}
