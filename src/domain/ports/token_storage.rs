//! Durable client storage port.

use crate::domain::errors::ApiResult;

/// Storage key for the bearer token.
pub const KEY_TOKEN: &str = "auth_token";
/// Storage key for the refresh token.
pub const KEY_REFRESH_TOKEN: &str = "refresh_token";
/// Storage key for the serialized user snapshot.
pub const KEY_USER: &str = "user";

/// Key-value storage that outlives the process, the analogue of the
/// browser's durable client storage.
///
/// Operations are synchronous; implementations hold small payloads
/// (a token pair and one serialized user).
pub trait TokenStorage: Send + Sync {
    /// Read a value, `None` if the key is absent.
    fn get(&self, key: &str) -> ApiResult<Option<String>>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> ApiResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> ApiResult<()>;

    /// Write several values in one durable step.
    ///
    /// Login persists token, refresh token, and user together; a partial
    /// write must not be observable after a crash.
    fn set_many(&self, entries: &[(&str, &str)]) -> ApiResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Remove several keys in one durable step.
    fn remove_many(&self, keys: &[&str]) -> ApiResult<()> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}
