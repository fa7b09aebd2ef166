//! Bootstrap input loading.
//!
//! Reads [`BootstrapConfig`] from a TOML file and overlays environment
//! variables:
//!
//! ```toml
//! api_base_url = "https://n8n.example.com/"
//! rest_endpoint = "rest"
//! hostname = "n8n.example.com"
//! ```
//!
//! | Environment variable     | Field            |
//! |--------------------------|------------------|
//! | `EDITOR_URL_BASE_API`    | `api_base_url`   |
//! | `EDITOR_BASE_PATH`       | `base_path`      |
//! | `EDITOR_REST_ENDPOINT`   | `rest_endpoint`  |
//! | `EDITOR_HOSTNAME`        | `hostname`       |
//! | `EDITOR_DEFAULT_LOCALE`  | `default_locale` |
//!
//! An environment variable wins over the file when it is set, even to the
//! empty string.  Fallback rules (placeholder REST endpoint, missing base
//! URL) are applied later by the `resolved_*` methods in the core crate.

use std::path::{Path, PathBuf};

use editor_config_core::BootstrapConfig;
use thiserror::Error;
use tracing::debug;

use crate::infrastructure::paths;

/// File name used under the platform config directory.
pub const BOOTSTRAP_FILE_NAME: &str = "bootstrap.toml";

pub const ENV_URL_BASE_API: &str = "EDITOR_URL_BASE_API";
pub const ENV_BASE_PATH: &str = "EDITOR_BASE_PATH";
pub const ENV_REST_ENDPOINT: &str = "EDITOR_REST_ENDPOINT";
pub const ENV_HOSTNAME: &str = "EDITOR_HOSTNAME";
pub const ENV_DEFAULT_LOCALE: &str = "EDITOR_DEFAULT_LOCALE";

/// Error type for bootstrap file loading.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// A file system I/O error occurred.
    #[error("I/O error reading bootstrap file at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse bootstrap TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads [`BootstrapConfig`] from `path`, returning the default (all fields
/// unset) if the file does not exist.
///
/// # Errors
///
/// Returns [`BootstrapError::Io`] for file-system errors other than "not
/// found", and [`BootstrapError::Parse`] if the TOML is malformed.
pub fn load_bootstrap(path: &Path) -> Result<BootstrapConfig, BootstrapError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: BootstrapConfig = toml::from_str(&content)?;
            debug!(path = %path.display(), "bootstrap file loaded");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BootstrapConfig::default()),
        Err(source) => Err(BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads `<platform config dir>/bootstrap.toml`, or the default when the
/// directory cannot be determined or the file is absent.
///
/// # Errors
///
/// See [`load_bootstrap`].
pub fn load_bootstrap_from_default_location() -> Result<BootstrapConfig, BootstrapError> {
    match paths::config_dir() {
        Some(dir) => load_bootstrap(&dir.join(BOOTSTRAP_FILE_NAME)),
        None => Ok(BootstrapConfig::default()),
    }
}

/// Overlays environment variables onto `config`.
///
/// `lookup` maps a variable name to its value; pass [`env_lookup`] for the
/// real process environment.
pub fn apply_env_overrides<F>(mut config: BootstrapConfig, lookup: F) -> BootstrapConfig
where
    F: Fn(&str) -> Option<String>,
{
    let overrides = [
        (ENV_URL_BASE_API, &mut config.api_base_url),
        (ENV_BASE_PATH, &mut config.base_path),
        (ENV_REST_ENDPOINT, &mut config.rest_endpoint),
        (ENV_HOSTNAME, &mut config.hostname),
        (ENV_DEFAULT_LOCALE, &mut config.default_locale),
    ];
    for (name, field) in overrides {
        if let Some(value) = lookup(name) {
            debug!(variable = name, "bootstrap value taken from environment");
            *field = Some(value);
        }
    }
    config
}

/// Reads a variable from the process environment.  Non-UTF-8 values count as unset.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
