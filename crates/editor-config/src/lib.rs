//! editor-config library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and embedding applications share the same module tree.
//!
//! # What does editor-config do?
//!
//! Every part of the editor client that builds an API or webhook URL, or
//! reads a session-scoped setting, goes through one [`ConfigStore`].  The
//! store:
//!
//! 1. Is constructed once per process from the bootstrap inputs (API base
//!    URL, base path, REST endpoint segment, host name).
//! 2. Restores the persisted locale, or falls back to the default locale,
//!    and starts loading its translation catalog.
//! 3. Serves read-only views and derived URLs (`webhook_url`,
//!    `rest_api_context`, ...), always computed from the current values.
//! 4. Accepts changes only through named setters, publishing a snapshot to
//!    subscribers after each one.
//!
//! # Example
//!
//! ```ignore
//! let deps = StoreDependencies {
//!     storage: Arc::new(TomlFileStorage::at_default_location()?),
//!     locale_loader: Arc::new(my_i18n_loader),
//!     timezone: Arc::new(GlobalTimezone),
//! };
//! let bootstrap = apply_env_overrides(load_bootstrap_from_default_location()?, env_lookup);
//! let mut store = ConfigStore::new(&bootstrap, deps);
//! store.set_url_base_webhook("https://hooks.example.com");
//! assert_eq!(store.webhook_url(), "https://hooks.example.com/webhook");
//! ```

/// Application layer: the store and its collaborator seams.
pub mod application;

/// Infrastructure layer: storage, locale-loading, timezone, and bootstrap adapters.
pub mod infrastructure;

pub use application::collaborators::{
    KeyValueStorage, LocaleLoadError, LocaleLoader, StorageError, TimezoneSink,
};
pub use application::config_store::{ConfigStore, StoreDependencies};
pub use application::locale_load::LocaleLoad;
pub use application::snapshot::ConfigSnapshot;
pub use editor_config_core as core;
