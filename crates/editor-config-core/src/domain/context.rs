//! REST API contexts.
//!
//! API helpers take a small context value rather than the whole store: the
//! base URL to call and the push reference to attach.  Two contexts exist:
//!
//! - the **instance** context, built from `rest_url` and the session's push
//!   reference;
//! - the **cloud** context, pointing at the hosted cloud API.  It never
//!   carries a push reference, and its base URL depends only on whether the
//!   editor is running on the staging host.

use serde::{Deserialize, Serialize};

use super::record::ConfigRecord;

/// Cloud API base URL for production deployments.
pub const CLOUD_BASE_URL_PRODUCTION: &str = "https://api.n8n.cloud";

/// Cloud API base URL for the staging deployment.
pub const CLOUD_BASE_URL_STAGING: &str = "https://api-staging.n8n.cloud";

/// Substring that marks a host name as the staging deployment.
pub const STAGING_HOST_MARKER: &str = "stage-app.n8n.cloud";

/// Base URL and push reference for a REST call.
///
/// Always an owned snapshot; it does not track later store changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestApiContext {
    pub base_url: String,
    pub push_ref: String,
}

impl RestApiContext {
    /// Instance context: `{ base_url: rest_url, push_ref }`.
    pub fn for_instance(record: &ConfigRecord) -> Self {
        Self {
            base_url: record.rest_url(),
            push_ref: record.push_ref.clone(),
        }
    }
}

/// Returns `true` when `hostname` contains [`STAGING_HOST_MARKER`].
pub fn is_staging_host(hostname: &str) -> bool {
    hostname.contains(STAGING_HOST_MARKER)
}

/// Cloud API base URL for the given host name.
pub fn cloud_base_url(hostname: &str) -> &'static str {
    if is_staging_host(hostname) {
        CLOUD_BASE_URL_STAGING
    } else {
        CLOUD_BASE_URL_PRODUCTION
    }
}

/// Cloud context for the given host name.  `push_ref` is always empty.
pub fn cloud_api_context(hostname: &str) -> RestApiContext {
    RestApiContext {
        base_url: cloud_base_url(hostname).to_string(),
        push_ref: String::new(),
    }
}
