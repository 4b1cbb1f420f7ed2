//! Persistence slots: a single string key mapped to one serialized blob.
//!
//! Writes replace the previous value in full. There is no versioning and no
//! partial-write recovery; the store treats any read failure as "absent".

use ads_core::{AdsError, AdsResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Opaque key/value get/set used to persist the store.
pub trait PersistenceSlot: Send + Sync {
    /// Last value written under `key`, or `None` if nothing was written.
    fn read(&self, key: &str) -> AdsResult<Option<String>>;

    /// Replace the value under `key`.
    fn write(&self, key: &str, value: &str) -> AdsResult<()>;
}

// ─── In-memory ─────────────────────────────────────────────────────────────

/// Process-local slot.
#[derive(Default)]
pub struct MemorySlot {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with one raw value, e.g. a corrupt blob.
    pub fn with_value(key: &str, value: &str) -> Self {
        let slot = Self::new();
        slot.values.write().insert(key.to_string(), value.to_string());
        slot
    }
}

impl PersistenceSlot for MemorySlot {
    fn read(&self, key: &str) -> AdsResult<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AdsResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ─── File-backed ───────────────────────────────────────────────────────────

/// Stores each key as `<dir>/<key>.json`.
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl PersistenceSlot for FileSlot {
    fn read(&self, key: &str) -> AdsResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> AdsResult<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        let path = self.path_for(key);
        fs::write(&path, value)?;
        debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }
}

// ─── Unavailable ───────────────────────────────────────────────────────────

/// Stands in when no persistence backend exists in the current context.
pub struct UnavailableSlot;

impl PersistenceSlot for UnavailableSlot {
    fn read(&self, _key: &str) -> AdsResult<Option<String>> {
        Err(AdsError::Persistence("no persistence backend available".to_string()))
    }

    fn write(&self, _key: &str, _value: &str) -> AdsResult<()> {
        Err(AdsError::Persistence("no persistence backend available".to_string()))
    }
}
