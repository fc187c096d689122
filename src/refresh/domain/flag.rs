//! Persisted auto-refresh toggle state.

use super::ParseAutoRefreshFlagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether edits to the worksheet trigger refresh cycles automatically.
///
/// Persisted as the strings `"true"` / `"false"` so the stored value stays
/// readable in the state file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoRefreshFlag {
    /// Edits are ignored; refreshes are operator-initiated only.
    #[default]
    Disabled,
    /// An edit observer is installed and new URLs trigger refresh cycles.
    Enabled,
}

impl AutoRefreshFlag {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disabled => "false",
            Self::Enabled => "true",
        }
    }

    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Disabled => Self::Enabled,
            Self::Enabled => Self::Disabled,
        }
    }

    /// Whether the flag is enabled.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for AutoRefreshFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AutoRefreshFlag {
    type Error = ParseAutoRefreshFlagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "true" => Ok(Self::Enabled),
            "false" => Ok(Self::Disabled),
            _ => Err(ParseAutoRefreshFlagError(value.to_owned())),
        }
    }
}
