//! Session-scoped key-value storage and the visited flag.
//!
//! The only state that outlives a view is whether the welcome splash has
//! already played in this session. It is kept behind the [`SessionStore`]
//! trait so hosts can back it with process memory, a file, or anything else,
//! and so tests can substitute a failing store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Key-value storage scoped to one browsing session.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-lifetime store. For a desktop app the process is the session.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Every operation re-reads the file, so several processes pointed at the
/// same file see each other's writes. A missing file reads as empty.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(HashMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SessionStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock();
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock();
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// Wraps a store and silently degrades to memory when it fails.
///
/// The first failure of the primary store is logged and from then on every
/// operation is served from memory; callers never see an error.
pub struct FallbackStore<S> {
    primary: S,
    memory: MemorySessionStore,
    degraded: AtomicBool,
}

impl<S: SessionStore> FallbackStore<S> {
    pub fn new(primary: S) -> Self {
        Self {
            primary,
            memory: MemorySessionStore::new(),
            degraded: AtomicBool::new(false),
        }
    }

    /// Whether the primary store has failed and memory is in use.
    pub fn is_degraded(&self) -> bool {
        self.degraded.load(Ordering::Relaxed)
    }

    fn degrade(&self, op: &str, key: &str, err: &StoreError) {
        if !self.degraded.swap(true, Ordering::Relaxed) {
            warn!(%op, %key, error = %err, "Session storage unavailable, using in-memory fallback");
        }
    }
}

impl<S: SessionStore> SessionStore for FallbackStore<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.is_degraded() {
            match self.primary.get(key) {
                Ok(value) => return Ok(value),
                Err(err) => self.degrade("get", key, &err),
            }
        }
        self.memory.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.is_degraded() {
            match self.primary.set(key, value) {
                Ok(()) => return Ok(()),
                Err(err) => self.degrade("set", key, &err),
            }
        }
        self.memory.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        if !self.is_degraded() {
            match self.primary.remove(key) {
                Ok(()) => return Ok(()),
                Err(err) => self.degrade("remove", key, &err),
            }
        }
        self.memory.remove(key)
    }
}

/// Storage key of the visited flag for an app id.
pub fn visited_key(app_id: &str) -> String {
    format!("{app_id}-visited")
}

/// Whether the welcome splash already played this session.
///
/// Absence of the key reads as `false`. Storage errors and unparsable values
/// are logged and also read as `false`; writing never fails the caller.
#[derive(Clone)]
pub struct VisitedFlag {
    key: String,
    store: Arc<dyn SessionStore>,
}

impl VisitedFlag {
    pub fn new(app_id: &str, store: Arc<dyn SessionStore>) -> Self {
        Self {
            key: visited_key(app_id),
            store,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_set(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(None) => false,
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key = %self.key, error = %err, "Ignoring malformed visited flag");
                    false
                }
            },
            Err(err) => {
                warn!(key = %self.key, error = %err, "Error reading visited flag");
                false
            }
        }
    }

    pub fn mark(&self) {
        let value = match serde_json::to_string(&true) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "Error serializing visited flag");
                return;
            }
        };
        match self.store.set(&self.key, &value) {
            Ok(()) => debug!(key = %self.key, "Visited flag set"),
            Err(err) => warn!(key = %self.key, error = %err, "Error setting visited flag"),
        }
    }
}

impl std::fmt::Debug for VisitedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisitedFlag").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose every operation fails.
    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }
    }

    #[test]
    fn test_visited_key_format() {
        assert_eq!(visited_key("arnav-portfolio"), "arnav-portfolio-visited");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap(), Some("1".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_visited_flag_absent_is_false() {
        let flag = VisitedFlag::new("app", Arc::new(MemorySessionStore::new()));
        assert!(!flag.is_set());

        flag.mark();
        assert!(flag.is_set());
    }

    #[test]
    fn test_visited_flag_stored_as_json() {
        let store = Arc::new(MemorySessionStore::new());
        let flag = VisitedFlag::new("app", store.clone());
        flag.mark();

        assert_eq!(store.get("app-visited").unwrap(), Some("true".to_string()));
    }

    #[test]
    fn test_visited_flag_malformed_value_is_false() {
        let store = Arc::new(MemorySessionStore::new());
        store.set("app-visited", "yes please").unwrap();

        let flag = VisitedFlag::new("app", store);
        assert!(!flag.is_set());
    }

    #[test]
    fn test_visited_flag_on_broken_store_never_panics() {
        let flag = VisitedFlag::new("app", Arc::new(BrokenStore));
        flag.mark();
        assert!(!flag.is_set());
    }

    #[test]
    fn test_fallback_store_degrades_to_memory() {
        let store = FallbackStore::new(BrokenStore);
        assert!(!store.is_degraded());

        store.set("k", "v").unwrap();
        assert!(store.is_degraded());
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_fallback_store_uses_primary_when_healthy() {
        let store = FallbackStore::new(MemorySessionStore::new());
        store.set("k", "v").unwrap();

        assert!(!store.is_degraded());
        assert_eq!(store.primary.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_json_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = JsonFileStore::new(&path);
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("app-visited", "true").unwrap();
        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("app-visited").unwrap(), Some("true".to_string()));

        reopened.remove("app-visited").unwrap();
        assert_eq!(store.get("app-visited").unwrap(), None);
    }

    #[test]
    fn test_json_file_store_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StoreError::Serialization(_))));

        let fallback = FallbackStore::new(JsonFileStore::new(&path));
        assert_eq!(fallback.get("k").unwrap(), None);
        assert!(fallback.is_degraded());
    }
}
