//! Device-local key-value storage for the session token and cached user.
//!
//! Exactly two entries are persisted: the raw token under
//! [`TOKEN_KEY`] and the serialized user object under [`USER_KEY`]. The
//! default backend is a JSON file under `${LADLE_HOME}` written with
//! restricted permissions (0600); an in-memory backend exists for tests.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::Error;

/// Storage key for the raw session token.
pub const TOKEN_KEY: &str = "recipe_app_token";

/// Storage key for the serialized user object.
pub const USER_KEY: &str = "recipe_app_user";

/// String key-value store abstraction over device-local storage.
///
/// Implementations must be cheap to call repeatedly; the HTTP wrapper reads
/// the token before every request.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;

    /// Removes several keys, stopping at the first failure.
    fn remove_many(&self, keys: &[&str]) -> Result<(), Error> {
        for key in keys {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// File-backed store: a flat JSON object at a fixed path.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Opens the store at the default location under `${LADLE_HOME}`.
    pub fn at_default_path() -> Self {
        Self::new(crate::config::paths::credentials_path())
    }

    fn load(&self) -> Result<HashMap<String, String>, Error> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| Error::storage(format!("failed to read {}: {e}", self.path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| Error::storage(format!("corrupt store {}: {e}", self.path.display())))
    }

    fn save(&self, entries: &HashMap<String, String>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::storage(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| Error::storage(format!("failed to serialize store: {e}")))?;

        // Tokens live here; keep the file private to the user.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .map_err(|e| {
                    Error::storage(format!("failed to open {}: {e}", self.path.display()))
                })?;
            file.write_all(contents.as_bytes()).map_err(|e| {
                Error::storage(format!("failed to write {}: {e}", self.path.display()))
            })?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents).map_err(|e| {
                Error::storage(format!("failed to write {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.lock().expect("store lock").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.lock().expect("store lock").remove(key);
        Ok(())
    }
}
