//! In-memory token storage, for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::errors::ApiResult;
use crate::domain::ports::TokenStorage;

/// Process-local [`TokenStorage`]; contents vanish on exit.
#[derive(Debug, Default)]
pub struct MemoryTokenStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.values.lock().expect("storage lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        self.values
            .lock()
            .expect("storage lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ApiResult<()> {
        self.values.lock().expect("storage lock poisoned").remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let storage = MemoryTokenStorage::new();
        assert_eq!(storage.get("auth_token").unwrap(), None);
        storage.set("auth_token", "tok").unwrap();
        assert_eq!(storage.get("auth_token").unwrap(), Some("tok".to_string()));
        storage.remove("auth_token").unwrap();
        assert_eq!(storage.get("auth_token").unwrap(), None);
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let storage = MemoryTokenStorage::new();
        assert!(storage.remove("nope").is_ok());
    }
}
