use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecureString;

/// Errors raised by durable token storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode session file: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Durable home of the session token.
///
/// Only the token survives a restart; the user object is always
/// re-fetched from the backend with it.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<SecureString>, StorageError>;
    fn save(&self, token: &SecureString) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// On-disk layout: a TOML file with the single key `token`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<SecureString>,
}

/// Token store backed by a TOML file.
///
/// Writes go to a temp file that is renamed over the target, under an
/// exclusive `fs2` lock on a sidecar `.lock` file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn lock(&self) -> Result<File, StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }
        let lock_path = self.path.with_extension("lock");
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| self.io_err(e))?;
        file.lock_exclusive().map_err(|e| self.io_err(e))?;
        Ok(file)
    }

    fn read(&self) -> Result<SessionFile, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionFile::default())
            }
            Err(e) => return Err(self.io_err(e)),
        };
        toml::from_str(&content).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    fn write(&self, session: &SessionFile) -> Result<(), StorageError> {
        let content = toml::to_string(session)?;
        let tmp_path = self.path.with_extension("tmp");

        let mut tmp = File::create(&tmp_path).map_err(|e| self.io_err(e))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| self.io_err(e))?;
        }
        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.sync_all())
            .map_err(|e| self.io_err(e))?;
        drop(tmp);

        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_err(e))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SecureString>, StorageError> {
        let _lock = self.lock()?;
        Ok(self.read()?.token.filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &SecureString) -> Result<(), StorageError> {
        let _lock = self.lock()?;
        let mut session = self.read().unwrap_or_default();
        session.token = Some(token.clone());
        self.write(&session)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let _lock = self.lock()?;
        if !self.path.exists() {
            return Ok(());
        }
        let mut session = self.read().unwrap_or_default();
        session.token = None;
        self.write(&session)
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<SecureString>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(SecureString::new(token))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<SecureString>, StorageError> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &SecureString) -> Result<(), StorageError> {
        *self.token.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.token.lock() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(store.load().unwrap().is_none());
        store.save(&SecureString::new("abc")).unwrap();
        assert_eq!(store.load().unwrap().unwrap().expose(), "abc");
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
