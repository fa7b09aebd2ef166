//! Bootstrap inputs read once when the store is constructed.
//!
//! The editor is served with a few values injected by the host page or the
//! build: an API base-URL override, a base path, the REST endpoint segment,
//! and the host name the editor runs under.  Any of them may be missing, and
//! the REST endpoint may still carry the literal template placeholder when
//! the server did not substitute it.
//!
//! [`BootstrapConfig`] holds the raw values; the `resolved_*` methods apply
//! the fallback rules.  Reading the values from a file or the environment is
//! the infrastructure layer's job.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::ConfigRecord;

/// Literal placeholder left in the page when the REST endpoint was not substituted.
pub const REST_ENDPOINT_PLACEHOLDER: &str = "{{REST_ENDPOINT}}";

/// REST endpoint segment used when none was provided.
pub const DEFAULT_REST_ENDPOINT: &str = "rest";

/// Base URL used when neither the API override nor the base path is set.
pub const DEFAULT_BASE_URL: &str = "/";

/// Raw ambient inputs, all optional.
///
/// # Serde default values
///
/// The struct derives `Deserialize` with `#[serde(default)]` so a bootstrap
/// file may list any subset of the fields, or none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Explicit API base URL.  Wins over `base_path` when set.
    pub api_base_url: Option<String>,
    /// Path the editor is served under (e.g. `"/n8n/"`).
    pub base_path: Option<String>,
    /// REST endpoint segment, possibly the unsubstituted placeholder.
    pub rest_endpoint: Option<String>,
    /// Host name of the page, used to tell staging from production.
    pub hostname: Option<String>,
    /// Default locale override.  `Some("")` disables the default locale.
    pub default_locale: Option<String>,
}

impl BootstrapConfig {
    /// `api_base_url`, else `base_path`, else [`DEFAULT_BASE_URL`].
    pub fn resolved_base_url(&self) -> String {
        self.api_base_url
            .as_deref()
            .or(self.base_path.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// The REST endpoint segment, or `"rest"` when it is unset, empty, or
    /// still the [`REST_ENDPOINT_PLACEHOLDER`].
    pub fn resolved_rest_endpoint(&self) -> String {
        match self.rest_endpoint.as_deref() {
            None | Some("") => DEFAULT_REST_ENDPOINT.to_string(),
            Some(REST_ENDPOINT_PLACEHOLDER) => {
                debug!("REST endpoint placeholder was not substituted; using default");
                DEFAULT_REST_ENDPOINT.to_string()
            }
            Some(endpoint) => endpoint.to_string(),
        }
    }

    /// The default locale override, or `"en"` when unset.
    ///
    /// An explicitly empty override is preserved so that the store's init
    /// cascade can leave the locale unset.
    pub fn resolved_default_locale(&self) -> String {
        self.default_locale
            .clone()
            .unwrap_or_else(|| ConfigRecord::DEFAULT_LOCALE.to_string())
    }

    /// Host name for cloud-context selection; empty when unknown.
    pub fn resolved_hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or("")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Base URL ──────────────────────────────────────────────────────────────

    #[test]
    fn test_base_url_prefers_api_override() {
        let cfg = BootstrapConfig {
            api_base_url: Some("http://localhost:5678/".to_string()),
            base_path: Some("/n8n/".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_base_url(), "http://localhost:5678/");
    }

    #[test]
    fn test_base_url_falls_back_to_base_path() {
        let cfg = BootstrapConfig {
            base_path: Some("/n8n/".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_base_url(), "/n8n/");
    }

    #[test]
    fn test_base_url_defaults_to_root() {
        assert_eq!(BootstrapConfig::default().resolved_base_url(), "/");
    }

    // ── REST endpoint ─────────────────────────────────────────────────────────

    #[test]
    fn test_rest_endpoint_defaults_when_unset() {
        assert_eq!(BootstrapConfig::default().resolved_rest_endpoint(), "rest");
    }

    #[test]
    fn test_rest_endpoint_defaults_when_empty() {
        let cfg = BootstrapConfig {
            rest_endpoint: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_rest_endpoint(), "rest");
    }

    #[test]
    fn test_rest_endpoint_placeholder_is_treated_as_unset() {
        let cfg = BootstrapConfig {
            rest_endpoint: Some("{{REST_ENDPOINT}}".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_rest_endpoint(), "rest");
    }

    #[test]
    fn test_rest_endpoint_custom_value_is_kept() {
        let cfg = BootstrapConfig {
            rest_endpoint: Some("api/v2".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_rest_endpoint(), "api/v2");
    }

    // ── Locale and host ───────────────────────────────────────────────────────

    #[test]
    fn test_default_locale_falls_back_to_en() {
        assert_eq!(BootstrapConfig::default().resolved_default_locale(), "en");
    }

    #[test]
    fn test_explicit_empty_default_locale_is_preserved() {
        let cfg = BootstrapConfig {
            default_locale: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_default_locale(), "");
    }

    #[test]
    fn test_hostname_is_empty_when_unknown() {
        assert_eq!(BootstrapConfig::default().resolved_hostname(), "");
    }

    // ── TOML input ────────────────────────────────────────────────────────────

    #[test]
    fn test_deserialize_partial_toml_leaves_other_fields_unset() {
        // Arrange
        let toml_str = r#"
rest_endpoint = "rest"
hostname = "app.n8n.cloud"
"#;

        // Act
        let cfg: BootstrapConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.rest_endpoint.as_deref(), Some("rest"));
        assert_eq!(cfg.hostname.as_deref(), Some("app.n8n.cloud"));
        assert_eq!(cfg.api_base_url, None);
        assert_eq!(cfg.default_locale, None);
    }

    #[test]
    fn test_deserialize_empty_toml_is_default() {
        let cfg: BootstrapConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, BootstrapConfig::default());
    }
}
