//! Configuration for the local (guest/offline) store.

use std::env;
use std::path::PathBuf;

/// Blob key the whole local state is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "whist_local_games";

/// Prefix for identifiers minted by the local store.
pub const DEFAULT_ID_PREFIX: &str = "local_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalConfig {
    pub storage_key: String,
    pub id_prefix: String,
    /// Directory for file-backed blob storage; `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            data_dir: None,
        }
    }
}

impl LocalConfig {
    /// Read overrides from `WHIST_LOCAL_STORAGE_KEY`, `WHIST_LOCAL_ID_PREFIX`
    /// and `WHIST_LOCAL_DATA_DIR`; blank values fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            storage_key: non_blank("WHIST_LOCAL_STORAGE_KEY").unwrap_or(defaults.storage_key),
            id_prefix: non_blank("WHIST_LOCAL_ID_PREFIX").unwrap_or(defaults.id_prefix),
            data_dir: non_blank("WHIST_LOCAL_DATA_DIR").map(PathBuf::from),
        }
    }
}

fn non_blank(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
