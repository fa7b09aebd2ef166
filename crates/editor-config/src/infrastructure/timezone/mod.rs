//! Process-wide default timezone.
//!
//! Code that formats dates without an explicit zone (execution lists, log
//! timestamps, schedule previews) reads [`default_timezone`].  The store
//! writes it through the [`TimezoneSink`](crate::TimezoneSink) trait whenever
//! `set_timezone` is called:
//!
//! - [`GlobalTimezone`] writes the real process-wide setting.
//! - [`MockTimezoneSink`] records calls and leaves the global alone, so
//!   parallel tests do not race on shared state.

use std::sync::{Mutex, PoisonError, RwLock};

use tracing::debug;

use crate::application::collaborators::TimezoneSink;

static DEFAULT_TIMEZONE: RwLock<Option<String>> = RwLock::new(None);

/// The process-wide default timezone, `None` until one has been set.
pub fn default_timezone() -> Option<String> {
    DEFAULT_TIMEZONE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Writes the process-wide default timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalTimezone;

impl TimezoneSink for GlobalTimezone {
    fn set_default_timezone(&self, timezone: &str) {
        *DEFAULT_TIMEZONE
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(timezone.to_string());
        debug!(timezone, "process default timezone set");
    }
}

/// Records every timezone it is given.
#[derive(Default)]
pub struct MockTimezoneSink {
    calls: Mutex<Vec<String>>,
}

impl MockTimezoneSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timezones received so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TimezoneSink for MockTimezoneSink {
    fn set_default_timezone(&self, timezone: &str) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(timezone.to_string());
    }
}
