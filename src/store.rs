//! Key → JSON collection persistence.
//!
//! A store holds one serialized collection per key and only ever replaces
//! a collection wholesale.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::AppError;

pub const EMPLOYEES_KEY: &str = "employees";
pub const APPRECIATION_LETTERS_KEY: &str = "appreciationLetters";
pub const PENALTIES_KEY: &str = "penalties";

pub trait Store: Send + Sync {
    /// Raw JSON for `key`, or `None` when nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>, AppError>;

    fn save(&self, key: &str, json: &str) -> Result<(), AppError>;
}

/// Load and decode a collection; absent keys yield an empty collection.
pub fn load_collection<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Vec<T>, AppError> {
    match store.load(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map_err(|e| AppError::storage(format!("corrupt collection '{key}': {e}"))),
        None => Ok(Vec::new()),
    }
}

pub fn save_collection<T: Serialize>(
    store: &dyn Store,
    key: &str,
    items: &[T],
) -> Result<(), AppError> {
    let raw = serde_json::to_string(items)
        .map_err(|e| AppError::storage(format!("cannot encode '{key}': {e}")))?;
    store.save(key, &raw)
}

/// One `<key>.json` file per collection inside a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, AppError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::storage(format!("cannot create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Store for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("cannot read {}: {e}", path.display()))),
        }
    }

    fn save(&self, key: &str, json: &str) -> Result<(), AppError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, json)
            .map_err(|e| AppError::storage(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| AppError::storage(format!("cannot replace {}: {e}", path.display())))?;

        debug!(key, path = %path.display(), bytes = json.len(), "Collection saved");
        Ok(())
    }
}

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::internal("memory store poisoned"))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, json: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::internal("memory store poisoned"))?;
        entries.insert(key.to_string(), json.to_string());
        Ok(())
    }
}
