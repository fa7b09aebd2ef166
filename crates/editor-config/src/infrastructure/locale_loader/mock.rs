//! Mock locale loader for unit testing.
//!
//! # Why a mock loader?
//!
//! A real loader fetches and activates translation catalogs, which needs the
//! editor's i18n layer and, usually, the network.  The `MockLocaleLoader`
//! records each requested locale instead, so tests can assert exactly which
//! loads the store started and in what order.
//!
//! # Modes
//!
//! - [`MockLocaleLoader::new`] – every load succeeds immediately.
//! - [`MockLocaleLoader::failing`] – every load returns
//!   [`LocaleLoadError::Failed`].
//! - [`MockLocaleLoader::gated`] – every load waits for a permit handed out
//!   by [`MockLocaleLoader::release`].  Use it to observe the store while a
//!   load is still in flight.
//!
//! # Usage in tests
//!
//! ```ignore
//! let loader = Arc::new(MockLocaleLoader::gated());
//! let load = store.set_locale("de");
//! assert_eq!(store.locale(), Some("de"));   // visible before the load finishes
//! loader.release(1);
//! load.wait().await;
//! assert_eq!(loader.loaded(), vec!["de".to_string()]);
//! ```

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::application::collaborators::{LocaleLoadError, LocaleLoader};

/// A locale loader that records calls without loading anything.
#[derive(Default)]
pub struct MockLocaleLoader {
    /// Locales whose load completed successfully, in completion order.
    loaded: Mutex<Vec<String>>,
    /// When set, each load waits for one permit before completing.
    gate: Option<Semaphore>,
    /// When `true`, every load fails.
    should_fail: bool,
}

impl MockLocaleLoader {
    /// Creates a loader whose loads succeed immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader whose loads always fail.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Creates a loader whose loads block until [`release`](Self::release)d.
    pub fn gated() -> Self {
        Self {
            gate: Some(Semaphore::new(0)),
            ..Self::default()
        }
    }

    /// Lets `count` pending or future loads complete.  No-op unless gated.
    pub fn release(&self, count: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(count);
        }
    }

    /// Returns the locales loaded so far, in completion order.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl LocaleLoader for MockLocaleLoader {
    async fn load(&self, locale: &str) -> Result<(), LocaleLoadError> {
        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| LocaleLoadError::Failed(e.to_string()))?
                .forget();
        }
        if self.should_fail {
            return Err(LocaleLoadError::Failed("mock failure".into()));
        }
        self.loaded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(locale.to_string());
        Ok(())
    }
}
