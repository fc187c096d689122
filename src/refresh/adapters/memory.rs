//! In-memory state, registry, and recording presentation adapters for tests.

use crate::refresh::{
    domain::{AutoRefreshFlag, Notice, ObserverId, StatusReport},
    ports::{
        EditTriggerRegistry, FlagStore, Notifier, NotifyError, NotifyResult, ReportError,
        ReportResult, StateStoreError, StateStoreResult, StatusSink,
    },
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

fn poisoned(err: impl std::fmt::Display) -> StateStoreError {
    StateStoreError::persistence(std::io::Error::other(err.to_string()))
}

/// Thread-safe in-memory flag store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFlagStore {
    flag: Arc<Mutex<AutoRefreshFlag>>,
}

impl InMemoryFlagStore {
    /// Creates a store holding [`AutoRefreshFlag::Disabled`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FlagStore for InMemoryFlagStore {
    async fn load(&self) -> StateStoreResult<AutoRefreshFlag> {
        self.flag.lock().map(|flag| *flag).map_err(poisoned)
    }

    async fn store(&self, flag: AutoRefreshFlag) -> StateStoreResult<()> {
        let mut slot = self.flag.lock().map_err(poisoned)?;
        *slot = flag;
        Ok(())
    }
}

/// Thread-safe in-memory trigger registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTriggerRegistry {
    observers: Arc<Mutex<Vec<(ObserverId, String)>>>,
}

impl InMemoryTriggerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-registers an observer owned by someone else.
    #[must_use]
    pub fn seed(&self, handler: &str) -> ObserverId {
        let id = ObserverId::new();
        if let Ok(mut observers) = self.observers.lock() {
            observers.push((id, handler.to_owned()));
        }
        id
    }

    /// Returns all registered observers.
    #[must_use]
    pub fn registered(&self) -> Vec<(ObserverId, String)> {
        self.observers
            .lock()
            .map(|observers| observers.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl EditTriggerRegistry for InMemoryTriggerRegistry {
    async fn install(&self, handler: &str) -> StateStoreResult<ObserverId> {
        let mut observers = self.observers.lock().map_err(poisoned)?;
        let id = ObserverId::new();
        observers.push((id, handler.to_owned()));
        Ok(id)
    }

    async fn find(&self, handler: &str) -> StateStoreResult<Option<ObserverId>> {
        let observers = self.observers.lock().map_err(poisoned)?;
        Ok(observers
            .iter()
            .find(|(_, name)| name == handler)
            .map(|(id, _)| *id))
    }

    async fn remove(&self, id: ObserverId) -> StateStoreResult<()> {
        let mut observers = self.observers.lock().map_err(poisoned)?;
        let before = observers.len();
        observers.retain(|(observer, _)| *observer != id);
        if observers.len() == before {
            return Err(StateStoreError::UnknownObserver(id));
        }
        Ok(())
    }
}

/// Status sink recording every published report.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatusSink {
    reports: Arc<Mutex<Vec<StatusReport>>>,
}

impl RecordingStatusSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reports published so far.
    #[must_use]
    pub fn published(&self) -> Vec<StatusReport> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl StatusSink for RecordingStatusSink {
    async fn publish(&self, report: &StatusReport) -> ReportResult<()> {
        let mut reports = self
            .reports
            .lock()
            .map_err(|err| ReportError::sink(std::io::Error::other(err.to_string())))?;
        reports.push(report.clone());
        Ok(())
    }
}

/// Notifier recording every delivered notice.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the notices delivered so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .map(|notices| notices.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: &Notice) -> NotifyResult<()> {
        let mut notices = self
            .notices
            .lock()
            .map_err(|err| NotifyError::delivery(std::io::Error::other(err.to_string())))?;
        notices.push(notice.clone());
        Ok(())
    }
}
