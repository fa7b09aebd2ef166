//! Collaborator seams of the configuration store.
//!
//! The store depends on three things it does not own:
//!
//! - **[`KeyValueStorage`]** – durable string storage, used for exactly one
//!   key: the active locale code.
//! - **[`LocaleLoader`]** – activates a locale's translation catalog.  The
//!   store fires the load and does not wait for it.
//! - **[`TimezoneSink`]** – the process-wide default timezone read by
//!   anything that formats wall-clock values.
//!
//! Each seam is a trait so the application layer never names a concrete
//! adapter.  The infrastructure layer provides file-backed, in-memory,
//! process-global, and recording implementations.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for durable storage operations.
///
/// The store never surfaces these to its callers; it logs them and carries
/// on with the in-memory value.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing storage at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored content could not be parsed.
    #[error("failed to parse storage TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The content could not be serialized.
    #[error("failed to serialize storage: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable string key-value storage.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Error type for locale catalog loads.
#[derive(Debug, Error)]
pub enum LocaleLoadError {
    /// No catalog exists for the requested locale.
    #[error("no translation catalog for locale {0:?}")]
    NotFound(String),

    /// The catalog exists but could not be activated.
    #[error("failed to activate locale catalog: {0}")]
    Failed(String),
}

/// Activates the translation catalog for a locale.
///
/// Implementations may take arbitrarily long; the store runs each call on a
/// spawned task and never awaits it on the caller's path.
#[async_trait]
pub trait LocaleLoader: Send + Sync {
    /// Loads and activates the catalog for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleLoadError`] if the catalog cannot be activated.  The
    /// store logs the error; it is not reported to whoever changed the locale.
    async fn load(&self, locale: &str) -> Result<(), LocaleLoadError>;
}

/// Receives the process-wide default timezone.
pub trait TimezoneSink: Send + Sync {
    /// Makes `timezone` the default for the whole process.
    fn set_default_timezone(&self, timezone: &str);
}
