//! Infrastructure layer for the configuration store.
//!
//! Contains the adapters behind the store's collaborator traits, plus the
//! code that reads bootstrap inputs from disk and the environment.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `editor_config_core`, but MUST NOT be imported by the `application` layer
//! (outside of tests) or by the core crate.
//!
//! # Sub-modules
//!
//! - **`storage`** – [`KeyValueStorage`](crate::KeyValueStorage) adapters: a
//!   TOML file under the platform config directory, and an in-memory map
//!   with failure injection for tests.
//!
//! - **`locale_loader`** – a recording [`LocaleLoader`](crate::LocaleLoader)
//!   for tests and headless use.  Real catalog loading belongs to the i18n
//!   layer of the embedding application.
//!
//! - **`timezone`** – the process-wide default timezone and the sinks that
//!   write it.
//!
//! - **`bootstrap`** – reads a `bootstrap.toml` file and overlays
//!   `EDITOR_*` environment variables.
//!
//! - **`paths`** – platform config directory resolution shared by the file
//!   adapters.

pub mod bootstrap;
pub mod locale_loader;
pub mod paths;
pub mod storage;
pub mod timezone;
