//! Persisted UI preferences (the display theme)
use crate::notifications::NotificationQueue;
use crate::state::SharedState;
use keyscope_core::ThemeMode;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PreferenceResult<T> = Result<T, PreferenceError>;

/// Key/value storage that outlives the session
pub trait PreferenceBackend: Send + Sync {
    fn load(&self, key: &str) -> PreferenceResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> PreferenceResult<()>;
}

/// Preferences kept in a small JSON object on disk
#[derive(Debug, Clone)]
pub struct FilePreferenceBackend {
    path: PathBuf,
}

impl FilePreferenceBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> PreferenceResult<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(map) => Ok(map),
            _ => Ok(Map::new()),
        }
    }
}

impl PreferenceBackend for FilePreferenceBackend {
    fn load(&self, key: &str) -> PreferenceResult<Option<String>> {
        Ok(self
            .read_all()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    fn save(&self, key: &str, value: &str) -> PreferenceResult<()> {
        let mut all = self.read_all().unwrap_or_default();
        all.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(all))?)?;
        Ok(())
    }
}

/// Preferences that live only as long as the process
#[derive(Debug, Default)]
pub struct MemoryPreferenceBackend {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceBackend for MemoryPreferenceBackend {
    fn load(&self, key: &str) -> PreferenceResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(|p| p.into_inner());
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> PreferenceResult<()> {
        let mut values = self.values.lock().unwrap_or_else(|p| p.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads, applies and persists the theme
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Arc<dyn PreferenceBackend>,
    state: SharedState,
    notifications: NotificationQueue,
}

impl PreferenceStore {
    pub fn new(
        backend: Arc<dyn PreferenceBackend>,
        state: SharedState,
        notifications: NotificationQueue,
    ) -> Self {
        Self {
            backend,
            state,
            notifications,
        }
    }

    /// Apply the saved theme; light when nothing (or nothing readable) was saved
    pub async fn load(&self) -> ThemeMode {
        let mode = match self.backend.load(THEME_KEY) {
            Ok(Some(saved)) if saved == ThemeMode::Dark.as_str() => ThemeMode::Dark,
            Ok(_) => ThemeMode::Light,
            Err(e) => {
                warn!(error = %e, "Failed to read saved theme, using light mode");
                ThemeMode::Light
            }
        };
        self.apply(mode).await;
        debug!(theme = mode.as_str(), "Theme loaded");
        mode
    }

    /// Use `mode` for this session without persisting it
    pub async fn apply(&self, mode: ThemeMode) {
        self.state.write().await.theme = mode;
    }

    /// Flip the theme, persist it and tell the user
    pub async fn toggle(&self) -> ThemeMode {
        let mode = {
            let mut state = self.state.write().await;
            state.theme = state.theme.toggled();
            state.theme
        };

        if let Err(e) = self.backend.save(THEME_KEY, mode.as_str()) {
            warn!(error = %e, "Failed to persist theme");
        }

        let message = match mode {
            ThemeMode::Dark => "Dark mode enabled",
            ThemeMode::Light => "Light mode enabled",
        };
        self.notifications.info(message);
        mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Severity;
    use crate::state::AppState;
    use tempfile::TempDir;

    fn make_store(backend: Arc<dyn PreferenceBackend>) -> (PreferenceStore, SharedState, NotificationQueue) {
        let state = AppState::new("50000000").into_shared();
        let notifications = NotificationQueue::new();
        let store = PreferenceStore::new(backend, state.clone(), notifications.clone());
        (store, state, notifications)
    }

    #[tokio::test]
    async fn test_missing_preference_defaults_to_light() {
        let (store, state, _) = make_store(Arc::new(MemoryPreferenceBackend::default()));
        assert_eq!(store.load().await, ThemeMode::Light);
        assert_eq!(state.read().await.theme, ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_saved_dark_theme_is_applied() {
        let backend = Arc::new(MemoryPreferenceBackend::default());
        backend.save(THEME_KEY, "dark").unwrap();
        let (store, state, _) = make_store(backend);

        assert_eq!(store.load().await, ThemeMode::Dark);
        assert_eq!(state.read().await.theme, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_toggle_persists_and_notifies() {
        let backend = Arc::new(MemoryPreferenceBackend::default());
        let (store, state, notifications) = make_store(backend.clone());
        store.load().await;

        assert_eq!(store.toggle().await, ThemeMode::Dark);
        assert_eq!(backend.load(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(state.read().await.theme, ThemeMode::Dark);

        let shown = notifications.snapshot();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity, Severity::Info);
        assert_eq!(shown[0].message, "Dark mode enabled");
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_mode_and_persisted_value() {
        let backend = Arc::new(MemoryPreferenceBackend::default());
        let (store, state, _) = make_store(backend.clone());
        let original = store.load().await;

        store.toggle().await;
        store.toggle().await;

        assert_eq!(state.read().await.theme, original);
        assert_eq!(backend.load(THEME_KEY).unwrap().as_deref(), Some(original.as_str()));
    }

    #[tokio::test]
    async fn test_file_backend_survives_restart() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let (store, _, _) = make_store(Arc::new(FilePreferenceBackend::new(&path)));
        store.load().await;
        store.toggle().await;

        let (reloaded, state, _) = make_store(Arc::new(FilePreferenceBackend::new(&path)));
        assert_eq!(reloaded.load().await, ThemeMode::Dark);
        assert_eq!(state.read().await.theme, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_light() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let (store, _, _) = make_store(Arc::new(FilePreferenceBackend::new(&path)));
        assert_eq!(store.load().await, ThemeMode::Light);
    }
}
