//! URL normalisation and the URLs derived from a [`ConfigRecord`].
//!
//! Every derived URL is plain string concatenation of a base and a path
//! segment:
//!
//! | Derived URL           | Base               | Segment                    |
//! |-----------------------|--------------------|----------------------------|
//! | `form_url`            | `url_base_webhook` | `endpoint_form`            |
//! | `form_test_url`       | `url_base_editor`  | `endpoint_form_test`       |
//! | `form_waiting_url`    | `url_base_editor`  | `endpoint_form_waiting`    |
//! | `webhook_url`         | `url_base_webhook` | `endpoint_webhook`         |
//! | `webhook_test_url`    | `url_base_editor`  | `endpoint_webhook_test`    |
//! | `webhook_waiting_url` | `url_base_editor`  | `endpoint_webhook_waiting` |
//! | `mcp_url`             | `url_base_webhook` | `endpoint_mcp`             |
//! | `mcp_test_url`        | `url_base_editor`  | `endpoint_mcp_test`        |
//! | `rest_url`            | `base_url`         | `rest_endpoint`            |
//!
//! No separator is inserted.  The bases carry their own trailing slash (see
//! [`ensure_trailing_slash`]); `base_url` is used exactly as configured.
//!
//! The functions here are recomputed on every call.  Nothing is cached, so a
//! derived URL can never lag behind the record it was computed from.

use serde::{Deserialize, Serialize};

use super::record::ConfigRecord;

/// Appends `/` to `url` unless it already ends with one.
///
/// # Examples
///
/// ```rust
/// use editor_config_core::ensure_trailing_slash;
///
/// assert_eq!(ensure_trailing_slash("https://example.com"), "https://example.com/");
/// assert_eq!(ensure_trailing_slash("https://example.com/"), "https://example.com/");
/// ```
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

impl ConfigRecord {
    pub fn form_url(&self) -> String {
        format!("{}{}", self.url_base_webhook, self.endpoint_form)
    }

    pub fn form_test_url(&self) -> String {
        format!("{}{}", self.url_base_editor, self.endpoint_form_test)
    }

    pub fn form_waiting_url(&self) -> String {
        format!("{}{}", self.url_base_editor, self.endpoint_form_waiting)
    }

    pub fn webhook_url(&self) -> String {
        format!("{}{}", self.url_base_webhook, self.endpoint_webhook)
    }

    pub fn webhook_test_url(&self) -> String {
        format!("{}{}", self.url_base_editor, self.endpoint_webhook_test)
    }

    pub fn webhook_waiting_url(&self) -> String {
        format!("{}{}", self.url_base_editor, self.endpoint_webhook_waiting)
    }

    pub fn mcp_url(&self) -> String {
        format!("{}{}", self.url_base_webhook, self.endpoint_mcp)
    }

    pub fn mcp_test_url(&self) -> String {
        format!("{}{}", self.url_base_editor, self.endpoint_mcp_test)
    }

    /// Root of the instance REST API: `base_url + rest_endpoint`.
    pub fn rest_url(&self) -> String {
        format!("{}{}", self.base_url, self.rest_endpoint)
    }
}

/// All derived URLs of a record, computed in one pass.
///
/// This is a snapshot: it does not follow later changes to the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedUrls {
    pub form_url: String,
    pub form_test_url: String,
    pub form_waiting_url: String,
    pub webhook_url: String,
    pub webhook_test_url: String,
    pub webhook_waiting_url: String,
    pub mcp_url: String,
    pub mcp_test_url: String,
    pub rest_url: String,
}

impl DerivedUrls {
    pub fn from_record(record: &ConfigRecord) -> Self {
        Self {
            form_url: record.form_url(),
            form_test_url: record.form_test_url(),
            form_waiting_url: record.form_waiting_url(),
            webhook_url: record.webhook_url(),
            webhook_test_url: record.webhook_test_url(),
            webhook_waiting_url: record.webhook_waiting_url(),
            mcp_url: record.mcp_url(),
            mcp_test_url: record.mcp_test_url(),
            rest_url: record.rest_url(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
