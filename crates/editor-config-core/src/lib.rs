//! # editor-config-core
//!
//! Domain layer for the editor client's runtime configuration: the single
//! configuration record, the URLs derived from it, the REST contexts handed
//! to API callers, and the rules that turn raw bootstrap inputs into the
//! record's initial values.
//!
//! This crate has zero dependencies on OS APIs, async runtimes, or storage.
//! The `editor-config` crate builds the mutable store, the side-effecting
//! setters, and the collaborator adapters on top of it.
//!
//! # Architecture overview
//!
//! The editor needs a handful of server-discovered settings before it can
//! talk to anything: where the REST API lives, which path segments the
//! server uses for webhook / form / MCP triggers, the instance identity,
//! the active locale, and so on.  All of them live in one flat
//! [`ConfigRecord`].  Everything else here is a pure function of that record:
//!
//! - **`domain::record`** – the record itself, its defaults, and
//!   [`BinaryDataMode`].
//! - **`domain::urls`** – trailing-slash normalisation and the nine derived
//!   URLs (`formUrl`, `webhookTestUrl`, `restUrl`, ...).
//! - **`domain::context`** – [`RestApiContext`] values for the instance API
//!   and the cloud API.
//! - **`domain::push_ref`** – the random per-session push reference.
//! - **`domain::bootstrap`** – [`BootstrapConfig`], the ambient inputs read
//!   once at startup, and their fallback rules.

pub mod domain;

pub use domain::bootstrap::{
    BootstrapConfig, DEFAULT_BASE_URL, DEFAULT_REST_ENDPOINT, REST_ENDPOINT_PLACEHOLDER,
};
pub use domain::context::{
    cloud_api_context, cloud_base_url, is_staging_host, RestApiContext, CLOUD_BASE_URL_PRODUCTION,
    CLOUD_BASE_URL_STAGING, STAGING_HOST_MARKER,
};
pub use domain::push_ref::{generate_push_ref, PUSH_REF_LENGTH};
pub use domain::record::{
    BinaryDataMode, ConfigRecord, N8nMetadata, OAuthCallbackUrls, ParseBinaryDataModeError,
    LOCALE_STORAGE_KEY,
};
pub use domain::urls::{ensure_trailing_slash, DerivedUrls};
