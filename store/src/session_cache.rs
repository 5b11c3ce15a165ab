//! Cached session persistence.
//!
//! The browser keeps the last known [`SessionRecord`] under the `authUser`
//! localStorage key so a returning user is treated as signed in before the
//! backend has answered. Absent or unreadable payloads read back as "no
//! session"; loading the cache never fails a page load.
//!
//! Non-web targets swap localStorage for a process-local map with the same
//! API, which is what the tests run against.

use crate::models::SessionRecord;

use backend::{read_raw, remove_raw, write_raw};

/// localStorage key holding the serialized [`SessionRecord`].
pub const SESSION_KEY: &str = "authUser";

/// A write to the cache backend failed.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("session record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cache backend rejected the write: {0}")]
    Backend(String),
}

/// Read the cached session. Absent or corrupt entries read as `None`.
pub fn load() -> Option<SessionRecord> {
    let raw = read_raw(SESSION_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::debug!("discarding unreadable session cache: {err}");
            None
        }
    }
}

/// Persist the session for the next page load.
pub fn save(record: &SessionRecord) -> Result<(), CacheError> {
    let raw = serde_json::to_string(record)?;
    write_raw(SESSION_KEY, &raw)
}

/// Forget the cached session.
pub fn clear() {
    remove_raw(SESSION_KEY);
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::CacheError;

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn read_raw(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub fn write_raw(key: &str, value: &str) -> Result<(), CacheError> {
        let storage = storage()
            .ok_or_else(|| CacheError::Backend("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|_| CacheError::Backend("localStorage rejected the value".into()))
    }

    pub fn remove_raw(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::sync::{Mutex, OnceLock};

    use super::CacheError;

    fn map() -> &'static Mutex<HashMap<String, String>> {
        static MAP: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
        MAP.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn read_raw(key: &str) -> Option<String> {
        map().lock().unwrap().get(key).cloned()
    }

    pub fn write_raw(key: &str, value: &str) -> Result<(), CacheError> {
        map().lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn remove_raw(key: &str) {
        map().lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_is_stable() {
        // Deployed browsers already hold records under this name.
        assert_eq!(SESSION_KEY, "authUser");
    }

    #[test]
    fn test_cache_lifecycle() {
        clear();
        assert!(load().is_none());

        // Roundtrip
        let record = SessionRecord {
            uid: "u_1".into(),
            email: Some("ada@example.com".into()),
            name: Some("Ada".into()),
        };
        save(&record).unwrap();
        assert_eq!(load(), Some(record));

        // Unreadable payloads count as signed out
        write_raw(SESSION_KEY, "{definitely not json").unwrap();
        assert!(load().is_none());

        // Clearing removes whatever is there
        save(&SessionRecord {
            uid: "u_2".into(),
            email: None,
            name: None,
        })
        .unwrap();
        clear();
        assert!(load().is_none());
    }
}
