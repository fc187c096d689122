//! JSON state file backing the flag store and trigger registry.

use crate::refresh::{
    domain::{AutoRefreshFlag, ObserverId},
    ports::{EditTriggerRegistry, FlagStore, StateStoreError, StateStoreResult},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Wire shape of the state file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    auto_refresh: Option<String>,
    #[serde(default)]
    observers: Vec<PersistedObserver>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedObserver {
    id: Uuid,
    handler: String,
}

/// Flag store and trigger registry persisted in one small JSON file.
///
/// The file stands in for the host's property storage and trigger registry:
/// the flag is stored as the strings `"true"` / `"false"`, observers as
/// id/handler pairs.
#[derive(Debug, Clone)]
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Creates a store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_state(&self) -> StateStoreResult<PersistedState> {
        if !self.path.exists() {
            return Ok(PersistedState::default());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(StateStoreError::persistence)?;
        serde_json::from_str(&raw).map_err(StateStoreError::persistence)
    }

    fn write_state(&self, state: &PersistedState) -> StateStoreResult<()> {
        let rendered =
            serde_json::to_string_pretty(state).map_err(StateStoreError::persistence)?;
        std::fs::write(&self.path, rendered).map_err(StateStoreError::persistence)
    }
}

#[async_trait]
impl FlagStore for FileStateStore {
    async fn load(&self) -> StateStoreResult<AutoRefreshFlag> {
        let state = self.read_state()?;
        let Some(raw) = state.auto_refresh else {
            return Ok(AutoRefreshFlag::Disabled);
        };
        AutoRefreshFlag::try_from(raw.as_str()).map_err(StateStoreError::persistence)
    }

    async fn store(&self, flag: AutoRefreshFlag) -> StateStoreResult<()> {
        let mut state = self.read_state()?;
        state.auto_refresh = Some(flag.as_str().to_owned());
        self.write_state(&state)
    }
}

#[async_trait]
impl EditTriggerRegistry for FileStateStore {
    async fn install(&self, handler: &str) -> StateStoreResult<ObserverId> {
        let mut state = self.read_state()?;
        let id = ObserverId::new();
        state.observers.push(PersistedObserver {
            id: id.into_inner(),
            handler: handler.to_owned(),
        });
        self.write_state(&state)?;
        Ok(id)
    }

    async fn find(&self, handler: &str) -> StateStoreResult<Option<ObserverId>> {
        let state = self.read_state()?;
        Ok(state
            .observers
            .iter()
            .find(|observer| observer.handler == handler)
            .map(|observer| ObserverId::from_uuid(observer.id)))
    }

    async fn remove(&self, id: ObserverId) -> StateStoreResult<()> {
        let mut state = self.read_state()?;
        let before = state.observers.len();
        state
            .observers
            .retain(|observer| observer.id != id.into_inner());
        if state.observers.len() == before {
            return Err(StateStoreError::UnknownObserver(id));
        }
        self.write_state(&state)
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::FileStateStore;
    use crate::refresh::{
        domain::AutoRefreshFlag,
        ports::{EditTriggerRegistry, FlagStore, StateStoreError},
    };
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sheetwatch-{name}-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn missing_file_reads_as_disabled() {
        let store = FileStateStore::new(scratch_path("missing"));
        let flag = store.load().await.expect("load succeeds");
        assert_eq!(flag, AutoRefreshFlag::Disabled);
    }

    #[tokio::test]
    async fn flag_round_trips_through_the_file() {
        let path = scratch_path("flag");
        let store = FileStateStore::new(path.clone());

        store
            .store(AutoRefreshFlag::Enabled)
            .await
            .expect("store succeeds");
        let reloaded = FileStateStore::new(path.clone());
        let flag = reloaded.load().await.expect("load succeeds");

        assert_eq!(flag, AutoRefreshFlag::Enabled);
        let _ignored = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn observers_survive_reload_and_remove_by_id() {
        let path = scratch_path("observers");
        let store = FileStateStore::new(path.clone());

        let id = store.install("on_edit").await.expect("install succeeds");
        let reloaded = FileStateStore::new(path.clone());
        let found = reloaded.find("on_edit").await.expect("find succeeds");
        assert_eq!(found, Some(id));

        reloaded.remove(id).await.expect("remove succeeds");
        assert!(matches!(
            reloaded.remove(id).await,
            Err(StateStoreError::UnknownObserver(_))
        ));
        let _ignored = std::fs::remove_file(path);
    }
}
