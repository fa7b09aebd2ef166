//! ConfigStore: the editor's runtime configuration, one per client session.
//!
//! The store owns a single [`ConfigRecord`].  Callers read it through
//! accessor methods and the derived-URL methods, and change it only through
//! the named `set_*` methods.  There is no batch update; changing several
//! fields takes several calls, and a subscriber may observe the
//! intermediate states.
//!
//! # Construction
//!
//! Build exactly one store per process, at startup, and pass it (or an
//! `Arc<RwLock<ConfigStore>>`) to whatever needs it.  Construction:
//!
//! 1. Seeds the record from [`BootstrapConfig`] and hard-coded defaults and
//!    generates the push reference.
//! 2. Runs the locale cascade: the persisted locale if one is stored and
//!    non-empty, else the default locale if it is non-empty, else nothing.
//!    The chosen locale goes through [`ConfigStore::set_locale`], so it is
//!    persisted and its catalog load is started.
//!
//! When `new` returns, `locale()` is already set whenever a persisted or
//! default locale exists.  The catalog load may still be running.
//!
//! # Side effects
//!
//! Most setters assign one field and nothing else.  The exceptions:
//!
//! | Setter                                  | Extra effect                                  |
//! |-----------------------------------------|-----------------------------------------------|
//! | `set_url_base_webhook` / `_editor`      | appends a trailing `/` if missing             |
//! | `set_timezone`                          | updates the process-wide default timezone     |
//! | `set_locale`                            | persists the code, starts the catalog load    |
//!
//! No setter validates its input or reports failure.  Values come from the
//! server's own settings endpoint and are assigned as-is.
//!
//! # Change notification
//!
//! Every setter publishes one [`ConfigSnapshot`] on a `tokio::sync::watch`
//! channel after its assignment.  [`ConfigStore::subscribe`] hands out
//! receivers.  Publishing works with or without receivers and never blocks.

use std::sync::Arc;

use editor_config_core::{
    cloud_api_context, ensure_trailing_slash, BinaryDataMode, BootstrapConfig, ConfigRecord,
    DerivedUrls, N8nMetadata, OAuthCallbackUrls, RestApiContext, LOCALE_STORAGE_KEY,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::collaborators::{KeyValueStorage, LocaleLoader, TimezoneSink};
use super::locale_load::LocaleLoad;
use super::snapshot::ConfigSnapshot;

/// The collaborators a [`ConfigStore`] is wired to.
#[derive(Clone)]
pub struct StoreDependencies {
    pub storage: Arc<dyn KeyValueStorage>,
    pub locale_loader: Arc<dyn LocaleLoader>,
    pub timezone: Arc<dyn TimezoneSink>,
}

/// The runtime configuration store.
pub struct ConfigStore {
    state: ConfigRecord,
    /// Host name the editor runs under; selects the cloud API base URL.
    hostname: String,
    deps: StoreDependencies,
    changes: watch::Sender<ConfigSnapshot>,
    /// Catalog load started by the construction-time locale cascade.
    initial_locale_load: Option<LocaleLoad>,
}

impl ConfigStore {
    /// Creates the store and runs the locale initialization cascade.
    ///
    /// Catalog loads are spawned on the current Tokio runtime.  Outside a
    /// runtime the locale is still assigned and persisted, but no catalog is
    /// loaded.
    pub fn new(bootstrap: &BootstrapConfig, deps: StoreDependencies) -> Self {
        let state = ConfigRecord::from_bootstrap(bootstrap);
        let (changes, _) = watch::channel(ConfigSnapshot::capture(&state));

        let mut store = Self {
            state,
            hostname: bootstrap.resolved_hostname().to_string(),
            deps,
            changes,
            initial_locale_load: None,
        };
        store.initial_locale_load = store.initialize_locale();

        info!(
            rest_url = %store.rest_url(),
            locale = ?store.locale(),
            push_ref = %store.push_ref(),
            "configuration store initialised"
        );
        store
    }

    fn initialize_locale(&mut self) -> Option<LocaleLoad> {
        let persisted = match self.deps.storage.get(LOCALE_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("could not read persisted locale: {e}");
                None
            }
        };

        if let Some(locale) = persisted.filter(|l| !l.is_empty()) {
            debug!(%locale, "restoring persisted locale");
            return Some(self.set_locale(locale));
        }

        if !self.state.default_locale.is_empty() {
            let locale = self.state.default_locale.clone();
            debug!(%locale, "no persisted locale; using default locale");
            return Some(self.set_locale(locale));
        }

        debug!("no persisted or default locale; locale left unset");
        None
    }

    /// The catalog load started during construction, if the cascade chose a locale.
    pub fn initial_locale_load(&self) -> Option<&LocaleLoad> {
        self.initial_locale_load.as_ref()
    }

    /// Takes ownership of the construction-time catalog load, e.g. to await it.
    pub fn take_initial_locale_load(&mut self) -> Option<LocaleLoad> {
        self.initial_locale_load.take()
    }

    // ── Change notification ───────────────────────────────────────────────────

    /// Returns a receiver that sees a new snapshot after every mutation.
    ///
    /// The receiver starts out holding the current snapshot, marked as seen.
    pub fn subscribe(&self) -> watch::Receiver<ConfigSnapshot> {
        self.changes.subscribe()
    }

    /// Builds a snapshot of the current state.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot::capture(&self.state)
    }

    fn publish(&self) {
        self.changes.send_replace(ConfigSnapshot::capture(&self.state));
    }

    // ── Read-only views ───────────────────────────────────────────────────────

    /// The whole record, read-only.
    pub fn record(&self) -> &ConfigRecord {
        &self.state
    }

    pub fn base_url(&self) -> &str {
        &self.state.base_url
    }

    pub fn rest_endpoint(&self) -> &str {
        &self.state.rest_endpoint
    }

    pub fn default_locale(&self) -> &str {
        &self.state.default_locale
    }

    /// The active locale, `None` if none has been assigned.
    pub fn locale(&self) -> Option<&str> {
        self.state.locale.as_deref()
    }

    pub fn endpoint_form(&self) -> &str {
        &self.state.endpoint_form
    }

    pub fn endpoint_form_test(&self) -> &str {
        &self.state.endpoint_form_test
    }

    pub fn endpoint_form_waiting(&self) -> &str {
        &self.state.endpoint_form_waiting
    }

    pub fn endpoint_mcp(&self) -> &str {
        &self.state.endpoint_mcp
    }

    pub fn endpoint_mcp_test(&self) -> &str {
        &self.state.endpoint_mcp_test
    }

    pub fn endpoint_webhook(&self) -> &str {
        &self.state.endpoint_webhook
    }

    pub fn endpoint_webhook_test(&self) -> &str {
        &self.state.endpoint_webhook_test
    }

    pub fn endpoint_webhook_waiting(&self) -> &str {
        &self.state.endpoint_webhook_waiting
    }

    pub fn timezone(&self) -> &str {
        &self.state.timezone
    }

    pub fn execution_timeout(&self) -> i64 {
        self.state.execution_timeout
    }

    pub fn max_execution_timeout(&self) -> i64 {
        self.state.max_execution_timeout
    }

    pub fn version_cli(&self) -> &str {
        &self.state.version_cli
    }

    pub fn oauth_callback_urls(&self) -> &OAuthCallbackUrls {
        &self.state.oauth_callback_urls
    }

    pub fn n8n_metadata(&self) -> &N8nMetadata {
        &self.state.n8n_metadata
    }

    pub fn push_ref(&self) -> &str {
        &self.state.push_ref
    }

    pub fn url_base_webhook(&self) -> &str {
        &self.state.url_base_webhook
    }

    pub fn url_base_editor(&self) -> &str {
        &self.state.url_base_editor
    }

    pub fn instance_id(&self) -> &str {
        &self.state.instance_id
    }

    pub fn binary_data_mode(&self) -> BinaryDataMode {
        self.state.binary_data_mode
    }

    /// Host name used for cloud-context selection.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    // ── Derived views ─────────────────────────────────────────────────────────

    pub fn form_url(&self) -> String {
        self.state.form_url()
    }

    pub fn form_test_url(&self) -> String {
        self.state.form_test_url()
    }

    pub fn form_waiting_url(&self) -> String {
        self.state.form_waiting_url()
    }

    pub fn webhook_url(&self) -> String {
        self.state.webhook_url()
    }

    pub fn webhook_test_url(&self) -> String {
        self.state.webhook_test_url()
    }

    pub fn webhook_waiting_url(&self) -> String {
        self.state.webhook_waiting_url()
    }

    pub fn mcp_url(&self) -> String {
        self.state.mcp_url()
    }

    pub fn mcp_test_url(&self) -> String {
        self.state.mcp_test_url()
    }

    pub fn rest_url(&self) -> String {
        self.state.rest_url()
    }

    pub fn derived_urls(&self) -> DerivedUrls {
        DerivedUrls::from_record(&self.state)
    }

    /// `{ base_url: rest_url, push_ref }` for calls to this instance.
    pub fn rest_api_context(&self) -> RestApiContext {
        RestApiContext::for_instance(&self.state)
    }

    /// Context for calls to the cloud API.  Its push reference is always empty.
    pub fn rest_cloud_api_context(&self) -> RestApiContext {
        cloud_api_context(&self.hostname)
    }

    // ── Mutators ──────────────────────────────────────────────────────────────

    /// Sets the production base URL, appending `/` if missing.
    pub fn set_url_base_webhook(&mut self, url: &str) {
        self.state.url_base_webhook = ensure_trailing_slash(url);
        self.publish();
    }

    /// Sets the editor base URL, appending `/` if missing.
    pub fn set_url_base_editor(&mut self, url: &str) {
        self.state.url_base_editor = ensure_trailing_slash(url);
        self.publish();
    }

    pub fn set_endpoint_form(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_form = endpoint.into();
        self.publish();
    }

    pub fn set_endpoint_form_test(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_form_test = endpoint.into();
        self.publish();
    }

    pub fn set_endpoint_form_waiting(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_form_waiting = endpoint.into();
        self.publish();
    }

    pub fn set_endpoint_webhook(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_webhook = endpoint.into();
        self.publish();
    }

    pub fn set_endpoint_webhook_test(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_webhook_test = endpoint.into();
        self.publish();
    }

    pub fn set_endpoint_webhook_waiting(&mut self, endpoint: impl Into<String>) {
        self.state.endpoint_webhook_waiting = endpoint.into();
        self.publish();
    }

    /// Sets the timezone and makes it the process-wide default.
    pub fn set_timezone(&mut self, timezone: impl Into<String>) {
        self.state.timezone = timezone.into();
        self.deps.timezone.set_default_timezone(&self.state.timezone);
        info!(timezone = %self.state.timezone, "default timezone updated");
        self.publish();
    }

    pub fn set_execution_timeout(&mut self, timeout: i64) {
        self.state.execution_timeout = timeout;
        self.publish();
    }

    pub fn set_max_execution_timeout(&mut self, timeout: i64) {
        self.state.max_execution_timeout = timeout;
        self.publish();
    }

    pub fn set_version_cli(&mut self, version: impl Into<String>) {
        self.state.version_cli = version.into();
        self.publish();
    }

    pub fn set_instance_id(&mut self, instance_id: impl Into<String>) {
        self.state.instance_id = instance_id.into();
        self.publish();
    }

    /// Replaces the whole provider → callback URL map.  Nothing is merged.
    pub fn set_oauth_callback_urls(&mut self, urls: OAuthCallbackUrls) {
        self.state.oauth_callback_urls = urls;
        self.publish();
    }

    pub fn set_n8n_metadata(&mut self, metadata: N8nMetadata) {
        self.state.n8n_metadata = metadata;
        self.publish();
    }

    /// Sets the default locale.  The active locale is not touched.
    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.state.default_locale = locale.into();
        self.publish();
    }

    /// Sets the active locale, persists it, and starts its catalog load.
    ///
    /// `locale()` reflects the new code as soon as this returns; the catalog
    /// may not be active yet.  Await the returned handle to wait for it, or
    /// drop it to let the load finish in the background.  A persistence
    /// failure is logged and does not stop the locale change.
    pub fn set_locale(&mut self, locale: impl Into<String>) -> LocaleLoad {
        let locale = locale.into();
        self.state.locale = Some(locale.clone());

        if let Err(e) = self.deps.storage.set(LOCALE_STORAGE_KEY, &locale) {
            warn!(%locale, "could not persist locale: {e}");
        }

        info!(%locale, "locale changed; loading catalog");
        let load = LocaleLoad::spawn(Arc::clone(&self.deps.locale_loader), locale);
        self.publish();
        load
    }

    pub fn set_binary_data_mode(&mut self, mode: BinaryDataMode) {
        self.state.binary_data_mode = mode;
        self.publish();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::locale_loader::mock::MockLocaleLoader;
    use crate::infrastructure::storage::memory::MemoryStorage;
    use crate::infrastructure::timezone::MockTimezoneSink;

    struct Harness {
        storage: Arc<MemoryStorage>,
        loader: Arc<MockLocaleLoader>,
        timezone: Arc<MockTimezoneSink>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                storage: Arc::new(MemoryStorage::new()),
                loader: Arc::new(MockLocaleLoader::new()),
                timezone: Arc::new(MockTimezoneSink::new()),
            }
        }

        fn deps(&self) -> StoreDependencies {
            StoreDependencies {
                storage: Arc::clone(&self.storage) as Arc<dyn KeyValueStorage>,
                locale_loader: Arc::clone(&self.loader) as Arc<dyn LocaleLoader>,
                timezone: Arc::clone(&self.timezone) as Arc<dyn TimezoneSink>,
            }
        }

        fn store(&self) -> ConfigStore {
            ConfigStore::new(&BootstrapConfig::default(), self.deps())
        }
    }

    // ── Initialization cascade ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_persisted_locale_wins_over_default() {
        // Arrange
        let harness = Harness::new();
        harness.storage.insert(LOCALE_STORAGE_KEY, "fr");

        // Act
        let store = harness.store();

        // Assert
        assert_eq!(store.locale(), Some("fr"));
        assert_eq!(
            store.initial_locale_load().map(LocaleLoad::locale),
            Some("fr")
        );
    }

    #[tokio::test]
    async fn test_default_locale_used_when_nothing_persisted() {
        let harness = Harness::new();

        let mut store = harness.store();

        assert_eq!(store.locale(), Some("en"));
        // The cascade goes through set_locale, so the default is persisted too.
        assert_eq!(harness.storage.value(LOCALE_STORAGE_KEY).as_deref(), Some("en"));

        store.take_initial_locale_load().expect("load started").wait().await;
        assert_eq!(harness.loader.loaded(), vec!["en".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_persisted_locale_falls_back_to_default() {
        let harness = Harness::new();
        harness.storage.insert(LOCALE_STORAGE_KEY, "");

        let store = harness.store();

        assert_eq!(store.locale(), Some("en"));
    }

    #[tokio::test]
    async fn test_locale_unset_without_persisted_or_default_locale() {
        // Arrange
        let harness = Harness::new();
        let bootstrap = BootstrapConfig {
            default_locale: Some(String::new()),
            ..Default::default()
        };

        // Act
        let store = ConfigStore::new(&bootstrap, harness.deps());

        // Assert
        assert_eq!(store.locale(), None);
        assert!(store.initial_locale_load().is_none());
        assert!(harness.storage.value(LOCALE_STORAGE_KEY).is_none());
    }

    #[tokio::test]
    async fn test_storage_read_failure_falls_back_to_default_locale() {
        let harness = Harness {
            storage: Arc::new(MemoryStorage::failing()),
            ..Harness::new()
        };

        let store = harness.store();

        assert_eq!(store.locale(), Some("en"));
    }

    #[test]
    fn test_construction_outside_runtime_still_assigns_locale() {
        let harness = Harness::new();

        let store = harness.store();

        assert_eq!(store.locale(), Some("en"));
        assert!(store.initial_locale_load().expect("handle").is_finished());
        assert!(harness.loader.loaded().is_empty());
    }

    // ── set_locale ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_set_locale_is_visible_before_catalog_loads() {
        // Arrange: the loader blocks until released.
        let harness = Harness {
            loader: Arc::new(MockLocaleLoader::gated()),
            ..Harness::new()
        };
        let mut store = harness.store();

        // Act
        let load = store.set_locale("de");

        // Assert
        assert_eq!(store.locale(), Some("de"));
        assert_eq!(harness.storage.value(LOCALE_STORAGE_KEY).as_deref(), Some("de"));
        assert!(!load.is_finished());

        harness.loader.release(2);
        load.wait().await;
        assert!(harness.loader.loaded().contains(&"de".to_string()));
    }

    #[tokio::test]
    async fn test_set_locale_loader_failure_is_not_reported() {
        let harness = Harness {
            loader: Arc::new(MockLocaleLoader::failing()),
            ..Harness::new()
        };
        let mut store = harness.store();

        store.set_locale("pt-BR").wait().await;

        assert_eq!(store.locale(), Some("pt-BR"));
    }

    #[tokio::test]
    async fn test_set_locale_storage_failure_still_changes_locale() {
        let harness = Harness {
            storage: Arc::new(MemoryStorage::failing()),
            ..Harness::new()
        };
        let mut store = harness.store();

        store.set_locale("ja").wait().await;

        assert_eq!(store.locale(), Some("ja"));
        assert!(harness.loader.loaded().contains(&"ja".to_string()));
    }

    #[tokio::test]
    async fn test_set_default_locale_does_not_change_active_locale() {
        let harness = Harness::new();
        let mut store = harness.store();

        store.set_default_locale("es");

        assert_eq!(store.default_locale(), "es");
        assert_eq!(store.locale(), Some("en"));
    }

    // ── URL bases ─────────────────────────────────────────────────────────────

    #[test]
    fn test_set_url_base_webhook_appends_slash() {
        let mut store = Harness::new().store();

        store.set_url_base_webhook("https://hooks.example");

        assert_eq!(store.url_base_webhook(), "https://hooks.example/");
    }

    #[test]
    fn test_set_url_base_editor_keeps_existing_slash() {
        let mut store = Harness::new().store();

        store.set_url_base_editor("https://editor.example/");

        assert_eq!(store.url_base_editor(), "https://editor.example/");
    }

    #[test]
    fn test_webhook_url_follows_base_and_segment_changes() {
        // Arrange
        let mut store = Harness::new().store();

        // Act
        store.set_url_base_webhook("https://example.com/");
        store.set_endpoint_webhook("webhook");

        // Assert
        assert_eq!(store.webhook_url(), "https://example.com/webhook");

        store.set_endpoint_webhook("hooks");
        assert_eq!(store.webhook_url(), "https://example.com/hooks");
    }

    #[test]
    fn test_test_urls_follow_editor_base() {
        let mut store = Harness::new().store();

        store.set_url_base_editor("https://editor.example");
        store.set_endpoint_form_test("ft");
        store.set_endpoint_form_waiting("fw");
        store.set_endpoint_webhook_test("wt");
        store.set_endpoint_webhook_waiting("ww");

        assert_eq!(store.form_test_url(), "https://editor.example/ft");
        assert_eq!(store.form_waiting_url(), "https://editor.example/fw");
        assert_eq!(store.webhook_test_url(), "https://editor.example/wt");
        assert_eq!(store.webhook_waiting_url(), "https://editor.example/ww");
        assert_eq!(store.mcp_test_url(), "https://editor.example/mcp-test");
    }

    #[test]
    fn test_production_urls_follow_webhook_base() {
        let mut store = Harness::new().store();

        store.set_url_base_webhook("https://hooks.example");
        store.set_endpoint_form("f");

        assert_eq!(store.form_url(), "https://hooks.example/f");
        assert_eq!(store.mcp_url(), "https://hooks.example/mcp");
    }

    // ── Timezone ──────────────────────────────────────────────────────────────

    #[test]
    fn test_set_timezone_propagates_to_sink() {
        let harness = Harness::new();
        let mut store = harness.store();

        store.set_timezone("Europe/Berlin");

        assert_eq!(store.timezone(), "Europe/Berlin");
        assert_eq!(harness.timezone.calls(), vec!["Europe/Berlin".to_string()]);
    }

    #[test]
    fn test_construction_does_not_touch_timezone_sink() {
        let harness = Harness::new();

        let store = harness.store();

        assert_eq!(store.timezone(), "America/New_York");
        assert!(harness.timezone.calls().is_empty());
    }

    // ── Plain setters ─────────────────────────────────────────────────────────

    #[test]
    fn test_plain_setters_assign_values_as_is() {
        // Arrange
        let mut store = Harness::new().store();

        // Act
        store.set_execution_timeout(-42);
        store.set_max_execution_timeout(0);
        store.set_version_cli("not-a-semver");
        store.set_instance_id("abc123");
        store.set_binary_data_mode(BinaryDataMode::Filesystem);

        // Assert: no validation, no clamping.
        assert_eq!(store.execution_timeout(), -42);
        assert_eq!(store.max_execution_timeout(), 0);
        assert_eq!(store.version_cli(), "not-a-semver");
        assert_eq!(store.instance_id(), "abc123");
        assert_eq!(store.binary_data_mode(), BinaryDataMode::Filesystem);
    }

    #[test]
    fn test_set_oauth_callback_urls_replaces_map() {
        // Arrange
        let mut store = Harness::new().store();
        let mut first = OAuthCallbackUrls::new();
        first.insert("oauth1".to_string(), "https://old".to_string());
        store.set_oauth_callback_urls(first);

        // Act
        let mut second = OAuthCallbackUrls::new();
        second.insert("github".to_string(), "https://a".to_string());
        store.set_oauth_callback_urls(second.clone());

        // Assert
        assert_eq!(store.oauth_callback_urls(), &second);
    }

    #[test]
    fn test_set_n8n_metadata_replaces_blob() {
        let mut store = Harness::new().store();
        let mut metadata = N8nMetadata::new();
        metadata.insert("userId".to_string(), serde_json::json!("u-1"));

        store.set_n8n_metadata(metadata.clone());

        assert_eq!(store.n8n_metadata(), &metadata);
    }

    // ── Contexts ──────────────────────────────────────────────────────────────

    #[test]
    fn test_rest_url_tracks_bootstrap_values() {
        let harness = Harness::new();
        let bootstrap = BootstrapConfig {
            base_path: Some("/n8n/".to_string()),
            rest_endpoint: Some("{{REST_ENDPOINT}}".to_string()),
            ..Default::default()
        };

        let store = ConfigStore::new(&bootstrap, harness.deps());

        assert_eq!(store.rest_url(), "/n8n/rest");
        assert_eq!(store.rest_api_context().base_url, "/n8n/rest");
        assert_eq!(store.rest_api_context().push_ref, store.push_ref());
    }

    #[test]
    fn test_cloud_context_uses_bootstrap_hostname() {
        let harness = Harness::new();
        let bootstrap = BootstrapConfig {
            hostname: Some("acme.stage-app.n8n.cloud".to_string()),
            ..Default::default()
        };

        let store = ConfigStore::new(&bootstrap, harness.deps());

        let ctx = store.rest_cloud_api_context();
        assert_eq!(ctx.base_url, editor_config_core::CLOUD_BASE_URL_STAGING);
        assert_eq!(ctx.push_ref, "");
    }

    // ── Change notification ───────────────────────────────────────────────────

    #[test]
    fn test_each_mutation_publishes_one_snapshot() {
        // Arrange
        let mut store = Harness::new().store();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        // Act
        store.set_endpoint_form("f2");

        // Assert
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().urls.form_url, "http://localhost:5678/f2");
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_snapshot_matches_store_views() {
        let mut store = Harness::new().store();
        store.set_url_base_webhook("https://x.example");

        let snapshot = store.snapshot();

        assert_eq!(snapshot.record, *store.record());
        assert_eq!(snapshot.urls, store.derived_urls());
        assert_eq!(snapshot.rest_api_context, store.rest_api_context());
    }
}
