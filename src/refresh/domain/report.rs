//! Status reports and operator notices.
//!
//! The abstract form of the two fixed status cells the original surface
//! painted: a headline with a fixed style per status kind, plus a free-form
//! detail line.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Last-known state of a refresh cycle, as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// A cycle is underway.
    Refreshing,
    /// Fresh data was detected.
    Complete,
    /// The wait ceiling passed with no fresh data.
    StillPending,
    /// Nothing was dispatched; waiting on the external schedule.
    Untriggered,
    /// The dispatch failed.
    Failed,
}

impl StatusKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Refreshing => "refreshing",
            Self::Complete => "complete",
            Self::StillPending => "still_pending",
            Self::Untriggered => "untriggered",
            Self::Failed => "failed",
        }
    }

    /// Returns the default headline text.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Refreshing => "🔄 Refreshing data...",
            Self::Complete => "⚡ Data refresh complete",
            Self::StillPending => "⏳ Refresh still pending",
            Self::Untriggered => "💤 Waiting on scheduled run",
            Self::Failed => "❌ Refresh failed",
        }
    }

    /// Returns the cell style for this kind.
    #[must_use]
    pub const fn style(self) -> StatusStyle {
        match self {
            Self::Refreshing => StatusStyle::new("#3366cc"),
            Self::Complete => StatusStyle::new("#00cc66"),
            Self::StillPending => StatusStyle::new("#ff9900"),
            Self::Untriggered => StatusStyle::new("#999999"),
            Self::Failed => StatusStyle::new("#cc0000"),
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation style of a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    /// Background color as a hex triplet.
    pub background: &'static str,
    /// Font color as a hex triplet.
    pub font_color: &'static str,
    /// Whether the text is bold.
    pub bold: bool,
}

impl StatusStyle {
    const fn new(background: &'static str) -> Self {
        Self {
            background,
            font_color: "#ffffff",
            bold: true,
        }
    }
}

/// One rendered status transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    kind: StatusKind,
    headline: String,
    detail: Option<String>,
}

impl StatusReport {
    /// Creates a report with the kind's default headline.
    #[must_use]
    pub fn of(kind: StatusKind) -> Self {
        Self {
            kind,
            headline: kind.headline().to_owned(),
            detail: None,
        }
    }

    /// Adds a free-form detail line.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns the status kind.
    #[must_use]
    pub const fn kind(&self) -> StatusKind {
        self.kind
    }

    /// Returns the headline text.
    #[must_use]
    pub fn headline(&self) -> &str {
        &self.headline
    }

    /// Returns the detail line, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns the cell style for this report.
    #[must_use]
    pub const fn style(&self) -> StatusStyle {
        self.kind.style()
    }
}

/// One operator-facing dialog message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    title: String,
    body: String,
}

impl Notice {
    /// Creates a notice.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Returns the dialog title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the dialog body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
