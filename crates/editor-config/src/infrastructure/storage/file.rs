//! TOML-file-backed key-value storage.
//!
//! Values are kept as a flat table of strings:
//!
//! ```toml
//! N8N_LOCALE = "fr"
//! ```
//!
//! The file lives at `<config dir>/storage.toml` by default (see
//! [`paths::config_dir`](crate::infrastructure::paths::config_dir)).  A
//! missing file reads as an empty table, so the first run needs no setup.
//! Writes rewrite the whole file and create the directory if needed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::application::collaborators::{KeyValueStorage, StorageError};
use crate::infrastructure::paths;

/// File name used under the platform config directory.
pub const STORAGE_FILE_NAME: &str = "storage.toml";

type Table = BTreeMap<String, String>;

/// Key-value storage persisted to a TOML file.
pub struct TomlFileStorage {
    path: PathBuf,
    /// Serialises read-modify-write cycles from concurrent `set` calls.
    write_lock: Mutex<()>,
}

impl TomlFileStorage {
    /// Creates storage backed by the file at `path`.  Nothing is read or
    /// written until the first `get` / `set`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates storage at `<platform config dir>/storage.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the platform config
    /// directory cannot be determined from the environment.
    pub fn at_default_location() -> Result<Self, StorageError> {
        let dir = paths::config_dir().ok_or_else(|| {
            StorageError::Unavailable("could not determine platform config directory".to_string())
        })?;
        Ok(Self::new(dir.join(STORAGE_FILE_NAME)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<Table, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Table::new()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_table(&self, table: &Table) -> Result<(), StorageError> {
        // Ensure directory exists before writing.
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StorageError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(table)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStorage for TomlFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut table = self.read_table()?;
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)?;
        debug!(key, path = %self.path.display(), "storage value written");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
