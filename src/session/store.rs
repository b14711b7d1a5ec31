//! Session token storage.

use std::{
    fmt::Debug,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use serde_json::{Map, Value};
use tracing::debug;

use crate::session::errors::SessionError;

/// Key the bearer token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Persisted session state holding the bearer token.
pub trait SessionStore: Debug + Send + Sync {
    /// The stored bearer token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn token(&self) -> Result<Option<String>, SessionError>;

    /// Stores a bearer token, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    /// Removes the bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Process-local session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;

        Ok(())
    }
}

/// Session store backed by a JSON key/value file.
///
/// Other keys in the file are left untouched.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(error) => return Err(error.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, serde_json::to_string_pretty(entries)?)?;

        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Result<Option<String>, SessionError> {
        let entries = self.read_entries()?;

        Ok(entries
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;

        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));

        self.write_entries(&entries)?;

        debug!(path = %self.path.display(), "session token stored");

        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut entries = self.read_entries()?;

        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }

        self.write_entries(&entries)?;

        debug!(path = %self.path.display(), "session token cleared");

        Ok(())
    }
}
