//! The editor configuration record.
//!
//! [`ConfigRecord`] is the single entity behind the configuration store: a
//! flat bag of server-discovered settings.  It is created once per client
//! session from the bootstrap inputs plus hard-coded fallbacks, then changed
//! only through the store's named setters.
//!
//! # Serialised shape
//!
//! The record derives `Serialize`/`Deserialize` with camelCase field names so
//! that a JSON dump matches the shape the browser editor uses
//! (`baseUrl`, `restEndpoint`, `n8nMetadata`, ...).  This is what change
//! subscribers receive inside a snapshot.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bootstrap::BootstrapConfig;
use super::push_ref::generate_push_ref;

/// Durable storage key under which the active locale code is persisted.
pub const LOCALE_STORAGE_KEY: &str = "N8N_LOCALE";

/// Mapping from OAuth provider name (e.g. `"oauth2"`) to its callback URL.
pub type OAuthCallbackUrls = HashMap<String, String>;

/// Opaque metadata blob passed through from the server untouched.
pub type N8nMetadata = BTreeMap<String, serde_json::Value>;

// ── Binary data mode ──────────────────────────────────────────────────────────

/// Storage policy for binary payloads produced by workflow executions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryDataMode {
    /// Binary data is kept in memory alongside the execution data.
    #[default]
    Default,
    /// Binary data is written to the server's file system.
    Filesystem,
    /// Binary data is written to an S3-compatible object store.
    S3,
    /// Binary data is stored in the database.
    Database,
}

impl BinaryDataMode {
    /// Returns the wire name of the mode (`"default"`, `"filesystem"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filesystem => "filesystem",
            Self::S3 => "s3",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for BinaryDataMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known [`BinaryDataMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown binary data mode: {0:?}")]
pub struct ParseBinaryDataModeError(pub String);

impl FromStr for BinaryDataMode {
    type Err = ParseBinaryDataModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "filesystem" => Ok(Self::Filesystem),
            "s3" => Ok(Self::S3),
            "database" => Ok(Self::Database),
            other => Err(ParseBinaryDataModeError(other.to_string())),
        }
    }
}

// ── Config record ─────────────────────────────────────────────────────────────

/// The runtime configuration of one editor client session.
///
/// Field invariants that the store upholds:
///
/// - `url_base_webhook` and `url_base_editor` always end with `/`.
/// - `push_ref` is 10 lowercase alphanumeric characters, fixed for the
///   lifetime of the record.
/// - `rest_endpoint` is never the `{{REST_ENDPOINT}}` placeholder when the
///   record was built from bootstrap inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    /// Prefix for the instance REST API (e.g. `"/"` or `"https://n8n.example/"`).
    pub base_url: String,
    /// REST path segment appended to `base_url`.
    pub rest_endpoint: String,
    /// Locale used when nothing has been persisted.
    pub default_locale: String,
    /// Currently active locale, `None` until the init cascade or a setter assigns one.
    pub locale: Option<String>,
    pub endpoint_form: String,
    pub endpoint_form_test: String,
    pub endpoint_form_waiting: String,
    pub endpoint_mcp: String,
    pub endpoint_mcp_test: String,
    pub endpoint_webhook: String,
    pub endpoint_webhook_test: String,
    pub endpoint_webhook_waiting: String,
    /// IANA timezone name.
    pub timezone: String,
    /// Execution timeout in seconds; `-1` means no timeout.
    pub execution_timeout: i64,
    /// Upper bound for `execution_timeout`.
    pub max_execution_timeout: i64,
    /// Semantic version of the backing server.
    pub version_cli: String,
    pub oauth_callback_urls: OAuthCallbackUrls,
    pub n8n_metadata: N8nMetadata,
    /// Per-session push reference.
    pub push_ref: String,
    /// Base for production webhook / form / MCP URLs.
    pub url_base_webhook: String,
    /// Base for editor-origin test and waiting URLs.
    pub url_base_editor: String,
    pub instance_id: String,
    pub binary_data_mode: BinaryDataMode,
}

impl ConfigRecord {
    pub const DEFAULT_LOCALE: &'static str = "en";
    pub const DEFAULT_TIMEZONE: &'static str = "America/New_York";
    pub const DEFAULT_EXECUTION_TIMEOUT: i64 = -1;
    /// `2^53 - 1`, the largest integer a JSON number carries without loss.
    pub const DEFAULT_MAX_EXECUTION_TIMEOUT: i64 = 9_007_199_254_740_991;
    pub const DEFAULT_VERSION_CLI: &'static str = "0.0.0";
    pub const DEFAULT_URL_BASE: &'static str = "http://localhost:5678/";

    /// Builds the initial record from bootstrap inputs.
    ///
    /// Every field not covered by [`BootstrapConfig`] takes its hard-coded
    /// default, and a fresh push reference is generated.  The locale is left
    /// unset: assigning it is the store's init cascade, because it has side
    /// effects.
    pub fn from_bootstrap(bootstrap: &BootstrapConfig) -> Self {
        Self {
            base_url: bootstrap.resolved_base_url(),
            rest_endpoint: bootstrap.resolved_rest_endpoint(),
            default_locale: bootstrap.resolved_default_locale(),
            locale: None,
            endpoint_form: "form".to_string(),
            endpoint_form_test: "form-test".to_string(),
            endpoint_form_waiting: "form-waiting".to_string(),
            endpoint_mcp: "mcp".to_string(),
            endpoint_mcp_test: "mcp-test".to_string(),
            endpoint_webhook: "webhook".to_string(),
            endpoint_webhook_test: "webhook-test".to_string(),
            endpoint_webhook_waiting: "webhook-waiting".to_string(),
            timezone: Self::DEFAULT_TIMEZONE.to_string(),
            execution_timeout: Self::DEFAULT_EXECUTION_TIMEOUT,
            max_execution_timeout: Self::DEFAULT_MAX_EXECUTION_TIMEOUT,
            version_cli: Self::DEFAULT_VERSION_CLI.to_string(),
            oauth_callback_urls: OAuthCallbackUrls::new(),
            n8n_metadata: N8nMetadata::new(),
            push_ref: generate_push_ref(),
            url_base_webhook: Self::DEFAULT_URL_BASE.to_string(),
            url_base_editor: Self::DEFAULT_URL_BASE.to_string(),
            instance_id: String::new(),
            binary_data_mode: BinaryDataMode::default(),
        }
    }
}

impl Default for ConfigRecord {
    /// Equivalent to `ConfigRecord::from_bootstrap(&BootstrapConfig::default())`.
    ///
    /// Each call generates a new push reference.
    fn default() -> Self {
        Self::from_bootstrap(&BootstrapConfig::default())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
