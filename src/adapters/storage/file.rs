//! File-backed token storage.
//!
//! The durable-client-storage analogue: one JSON object of string keys,
//! rewritten atomically on every mutation via a temp-file rename, so a
//! login's token/refresh-token/user triple is never half-persisted.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::errors::{ApiError, ApiResult};
use crate::domain::ports::TokenStorage;

/// JSON-file-backed [`TokenStorage`].
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
    /// Serializes mutations; reads go to the in-memory mirror.
    state: Mutex<BTreeMap<String, String>>,
}

impl FileTokenStorage {
    /// Open (or create) the storage file at `path`.
    pub fn open(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref().to_path_buf();
        let state = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| ApiError::Storage(format!("read {}: {e}", path.display())))?;
            serde_json::from_str(&raw)
                .map_err(|e| ApiError::Storage(format!("parse {}: {e}", path.display())))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    fn persist(&self, state: &BTreeMap<String, String>) -> ApiResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| ApiError::Storage(format!("mkdir {}: {e}", parent.display())))?;
            }
        }
        let raw = serde_json::to_string_pretty(state)
            .map_err(|e| ApiError::Storage(format!("serialize session state: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .map_err(|e| ApiError::Storage(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| ApiError::Storage(format!("rename into {}: {e}", self.path.display())))
    }
}

impl TokenStorage for FileTokenStorage {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.state.lock().expect("storage lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let mut state = self.state.lock().expect("storage lock poisoned");
        state.insert(key.to_string(), value.to_string());
        self.persist(&state)
    }

    fn remove(&self, key: &str) -> ApiResult<()> {
        let mut state = self.state.lock().expect("storage lock poisoned");
        if state.remove(key).is_some() {
            self.persist(&state)?;
        }
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> ApiResult<()> {
        let mut state = self.state.lock().expect("storage lock poisoned");
        for (key, value) in entries {
            state.insert((*key).to_string(), (*value).to_string());
        }
        self.persist(&state)
    }

    fn remove_many(&self, keys: &[&str]) -> ApiResult<()> {
        let mut state = self.state.lock().expect("storage lock poisoned");
        let mut changed = false;
        for key in keys {
            changed |= state.remove(*key).is_some();
        }
        if changed {
            self.persist(&state)?;
        }
        Ok(())
    }
}
