//! Key/value blob storage behind the local store.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("invalid blob key: {0:?}")]
    InvalidKey(String),
    #[error("blob io error: {0}")]
    Io(#[from] std::io::Error),
}

/// String values under string keys. Implementations must be usable from any thread.
pub trait BlobStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BlobError>;
}

#[derive(Debug, Default)]
pub struct MemoryBlobStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an existing value, e.g. a blob saved by an earlier run.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .lock()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl BlobStorage for MemoryBlobStorage {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobError> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `dir`.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous value readable.
#[derive(Debug, Clone)]
pub struct FileBlobStorage {
    dir: PathBuf,
}

impl FileBlobStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, BlobError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(BlobError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl BlobStorage for FileBlobStorage {
    fn get(&self, key: &str) -> Result<Option<String>, BlobError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BlobError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
