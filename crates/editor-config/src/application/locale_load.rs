//! Handle for an in-flight locale catalog load.
//!
//! `ConfigStore::set_locale` assigns the locale synchronously and starts the
//! catalog load on a spawned task.  The returned [`LocaleLoad`] lets a caller
//! wait for the catalog if it needs to, but nothing requires it to: dropping
//! the handle detaches the task, it does not cancel it.
//!
//! Two loads started back to back both run to completion.  Which catalog
//! ends up active when they finish out of order is up to the loader.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::collaborators::LocaleLoader;

/// A fire-and-forget locale load.
#[derive(Debug)]
pub struct LocaleLoad {
    locale: String,
    /// `None` when no Tokio runtime was available to run the load.
    task: Option<JoinHandle<()>>,
}

impl LocaleLoad {
    /// Starts `loader.load(locale)` on the current Tokio runtime.
    ///
    /// Without a runtime the load is skipped with a warning and the handle
    /// reports itself finished.  Loader errors are logged by the task.
    pub(crate) fn spawn(loader: Arc<dyn LocaleLoader>, locale: String) -> Self {
        let Ok(runtime) = Handle::try_current() else {
            warn!(%locale, "no async runtime available; locale catalog not loaded");
            return Self { locale, task: None };
        };

        let task_locale = locale.clone();
        let task = runtime.spawn(async move {
            match loader.load(&task_locale).await {
                Ok(()) => debug!(locale = %task_locale, "locale catalog activated"),
                Err(e) => warn!(locale = %task_locale, "locale catalog load failed: {e}"),
            }
        });

        Self {
            locale,
            task: Some(task),
        }
    }

    /// The locale this load activates.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// `true` once the load has completed, failed, or was never started.
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Waits for the load to complete.
    ///
    /// Loader failures were already logged by the task, so this never fails.
    pub async fn wait(self) {
        if let Some(task) = self.task {
            if let Err(e) = task.await {
                warn!(locale = %self.locale, "locale load task did not complete: {e}");
            }
        }
    }
}
