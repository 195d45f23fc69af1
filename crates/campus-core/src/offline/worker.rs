//! The background worker: lifecycle and request interception.
//!
//! Lifecycle: `Parsed -> Installing -> Installed -> Activating -> Activated`.
//! Install precaches the fixed asset list into the static partition. Activation
//! removes every partition whose name is not one of the current [`CacheNames`];
//! bumping the version string is the only way cached entries are invalidated.
//!
//! Lookups search partitions oldest first, so a precached asset always shadows
//! any newer copy a stale-while-revalidate refresh writes to the dynamic
//! partition; precached assets change only with a version bump.

use super::fallback::offline_response;
use super::fetcher::Fetcher;
use super::request::{CachedResponse, FetchRequest};
use super::store::CacheStore;
use super::strategy::{Strategy, StrategyTable};
use crate::config::OfflineConfig;
use crate::error::{CampusError, Result};
use futures::future::{join_all, try_join_all};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};
use url::Url;

/// Names of the partitions owned by the current worker version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheNames {
    pub version: String,
    pub static_cache: String,
    pub dynamic_cache: String,
}

impl CacheNames {
    pub fn for_version(prefix: &str, version: &str) -> Self {
        Self {
            version: format!("{}-pwa-{}", prefix, version),
            static_cache: format!("{}-static-{}", prefix, version),
            dynamic_cache: format!("{}-dynamic-{}", prefix, version),
        }
    }

    /// True if `name` belongs to this version.
    pub fn owns(&self, name: &str) -> bool {
        name == self.version || name == self.static_cache || name == self.dynamic_cache
    }
}

impl Default for CacheNames {
    fn default() -> Self {
        Self::for_version(OfflineConfig::CACHE_PREFIX, OfflineConfig::CACHE_VERSION)
    }
}

/// Static configuration of a worker.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Origin the worker is registered for. Other origins pass through.
    pub origin: Url,
    pub names: CacheNames,
    /// Paths, relative to the origin, cached at install time.
    pub precache: Vec<String>,
    pub strategies: StrategyTable,
}

impl WorkerConfig {
    pub fn new(origin: Url) -> Self {
        Self {
            origin,
            names: CacheNames::default(),
            precache: OfflineConfig::PRECACHE_ASSETS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            strategies: StrategyTable::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Parsed,
    Installing,
    Installed,
    Activating,
    Activated,
}

/// Messages pages can post to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    SkipWaiting,
    Other(String),
}

impl WorkerMessage {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "SKIP_WAITING" => WorkerMessage::SkipWaiting,
            other => WorkerMessage::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Number of assets stored; 0 when precaching failed.
    pub precached: usize,
    pub skip_waiting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationReport {
    /// Partitions removed because they belonged to another version.
    pub deleted: Vec<String>,
}

/// Where a handled response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Cache,
    Network,
    Offline,
}

/// A response produced by the worker.
#[derive(Debug)]
pub struct FetchReply {
    pub response: CachedResponse,
    pub strategy: Strategy,
    pub source: ResponseSource,
    /// Background refresh started by stale-while-revalidate. The reply never
    /// waits for it; callers may await it to observe the cache update.
    pub revalidation: Option<JoinHandle<()>>,
}

#[derive(Debug)]
pub enum FetchOutcome {
    /// Not intercepted; the browser handles the request normally.
    Passthrough,
    Handled(FetchReply),
}

/// Offline caching worker.
pub struct ServiceWorker {
    config: WorkerConfig,
    fetcher: Arc<dyn Fetcher>,
    store: Arc<dyn CacheStore>,
    state: WorkerState,
    skip_waiting: bool,
    clients_claimed: bool,
}

impl ServiceWorker {
    pub fn new(config: WorkerConfig, fetcher: Arc<dyn Fetcher>, store: Arc<dyn CacheStore>) -> Self {
        Self {
            config,
            fetcher,
            store,
            state: WorkerState::Parsed,
            skip_waiting: false,
            clients_claimed: false,
        }
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Installed but not allowed to take over yet.
    pub fn is_waiting(&self) -> bool {
        self.state == WorkerState::Installed && !self.skip_waiting
    }

    pub fn clients_claimed(&self) -> bool {
        self.clients_claimed
    }

    /// Precache the static assets.
    ///
    /// Precaching is all or nothing: if any asset fails to load, nothing is stored,
    /// the failure is logged and the worker stays installed but waiting.
    pub async fn install(&mut self) -> Result<InstallReport> {
        if self.state != WorkerState::Parsed {
            return Err(CampusError::Lifecycle {
                message: format!("cannot install from state {:?}", self.state),
            });
        }
        self.state = WorkerState::Installing;
        info!("Service worker installing");

        let precached = match self.precache().await {
            Ok(count) => {
                info!("Static files cached successfully ({} assets)", count);
                self.skip_waiting = true;
                count
            }
            Err(e) => {
                error!("Error caching static files: {}", e);
                0
            }
        };

        self.state = WorkerState::Installed;
        Ok(InstallReport {
            precached,
            skip_waiting: self.skip_waiting,
        })
    }

    async fn precache(&self) -> Result<usize> {
        let requests = self
            .config
            .precache
            .iter()
            .map(|path| {
                self.config
                    .origin
                    .join(path)
                    .map(FetchRequest::get)
                    .map_err(|e| CampusError::Other(format!("Invalid asset path {}: {}", path, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        let responses = try_join_all(requests.iter().map(|req| async move {
            let resp = self.fetcher.fetch(req).await?;
            if !resp.is_ok() {
                return Err(CampusError::Network {
                    message: format!("{} answered {}", req.url, resp.status),
                    cause: None,
                });
            }
            Ok::<_, CampusError>((req.cache_key(), resp))
        }))
        .await?;

        let partition = &self.config.names.static_cache;
        self.store.open(partition).await?;
        for (key, resp) in &responses {
            self.store.put(partition, key, resp.clone()).await?;
        }
        Ok(responses.len())
    }

    /// Handle a message posted by a page.
    pub fn handle_message(&mut self, message: WorkerMessage) {
        match message {
            WorkerMessage::SkipWaiting => {
                debug!("Skip waiting requested");
                self.skip_waiting = true;
            }
            WorkerMessage::Other(kind) => debug!("Ignoring worker message {}", kind),
        }
    }

    /// Delete partitions of other versions, then take control of open pages.
    ///
    /// All deletions finish before clients are claimed. If one fails the worker
    /// returns to `Installed`.
    pub async fn activate(&mut self) -> Result<ActivationReport> {
        if self.state != WorkerState::Installed {
            return Err(CampusError::Lifecycle {
                message: format!("cannot activate from state {:?}", self.state),
            });
        }
        self.state = WorkerState::Activating;
        info!("Service worker activating");

        match self.delete_stale_partitions().await {
            Ok(deleted) => {
                self.state = WorkerState::Activated;
                self.clients_claimed = true;
                info!("Service worker activated");
                Ok(ActivationReport { deleted })
            }
            Err(e) => {
                self.state = WorkerState::Installed;
                Err(e)
            }
        }
    }

    async fn delete_stale_partitions(&self) -> Result<Vec<String>> {
        let stale: Vec<String> = self
            .store
            .partitions()
            .await?
            .into_iter()
            .filter(|name| !self.config.names.owns(name))
            .collect();

        try_join_all(stale.iter().map(|name| async move {
            info!("Deleting old cache: {}", name);
            self.store.delete_partition(name).await
        }))
        .await?;

        Ok(stale)
    }

    /// Whether a request is routed through the caching strategies.
    pub fn intercepts(&self, request: &FetchRequest) -> bool {
        self.state == WorkerState::Activated
            && request.is_get()
            && request.url.origin() == self.config.origin.origin()
    }

    /// Resolve an outgoing request.
    pub async fn handle_fetch(&self, request: &FetchRequest) -> FetchOutcome {
        if !self.intercepts(request) {
            return FetchOutcome::Passthrough;
        }

        let strategy = self.config.strategies.classify(request.url.as_str());
        debug!("{} -> {:?}", request.url, strategy);

        let reply = match strategy {
            Strategy::CacheFirst => self.cache_first(request).await,
            Strategy::NetworkFirst => self.network_first(request).await,
            Strategy::StaleWhileRevalidate => self.stale_while_revalidate(request).await,
        };
        FetchOutcome::Handled(reply)
    }

    /// Batch variant of [`handle_fetch`](Self::handle_fetch); requests run concurrently.
    pub async fn handle_all(&self, requests: &[FetchRequest]) -> Vec<FetchOutcome> {
        join_all(requests.iter().map(|r| self.handle_fetch(r))).await
    }

    async fn cached(&self, request: &FetchRequest) -> Option<CachedResponse> {
        match self.store.require(&request.cache_key()).await {
            Ok(hit) => Some(hit),
            Err(CampusError::CacheMiss { key }) => {
                debug!("Cache miss for {}", key);
                None
            }
            Err(e) => {
                warn!("Cache lookup failed for {}: {}", request.url, e);
                None
            }
        }
    }

    async fn remember(&self, request: &FetchRequest, response: &CachedResponse) {
        if let Err(e) = self
            .store
            .put(&self.config.names.dynamic_cache, &request.cache_key(), response.clone())
            .await
        {
            warn!("Failed to cache {}: {}", request.url, e);
        }
    }

    async fn offline(&self, request: &FetchRequest, strategy: Strategy) -> FetchReply {
        FetchReply {
            response: offline_response(self.store.as_ref(), request).await,
            strategy,
            source: ResponseSource::Offline,
            revalidation: None,
        }
    }

    async fn cache_first(&self, request: &FetchRequest) -> FetchReply {
        let strategy = Strategy::CacheFirst;
        if let Some(response) = self.cached(request).await {
            return reply(response, strategy, ResponseSource::Cache);
        }

        match self.fetcher.fetch(request).await {
            Ok(response) => {
                if response.is_ok() {
                    self.remember(request, &response).await;
                }
                reply(response, strategy, ResponseSource::Network)
            }
            Err(e) => {
                warn!("Cache first strategy failed for {}: {}", request.url, e);
                self.offline(request, strategy).await
            }
        }
    }

    async fn network_first(&self, request: &FetchRequest) -> FetchReply {
        let strategy = Strategy::NetworkFirst;
        match self.fetcher.fetch(request).await {
            Ok(response) => {
                if response.is_ok() {
                    self.remember(request, &response).await;
                }
                reply(response, strategy, ResponseSource::Network)
            }
            Err(e) => {
                debug!("Network failed, trying cache for {}: {}", request.url, e);
                match self.cached(request).await {
                    Some(response) => reply(response, strategy, ResponseSource::Cache),
                    None => self.offline(request, strategy).await,
                }
            }
        }
    }

    async fn stale_while_revalidate(&self, request: &FetchRequest) -> FetchReply {
        let strategy = Strategy::StaleWhileRevalidate;
        match self.cached(request).await {
            Some(response) => {
                let handle = tokio::spawn(revalidate(
                    Arc::clone(&self.fetcher),
                    Arc::clone(&self.store),
                    self.config.names.dynamic_cache.clone(),
                    request.clone(),
                ));
                FetchReply {
                    response,
                    strategy,
                    source: ResponseSource::Cache,
                    revalidation: Some(handle),
                }
            }
            None => match self.fetcher.fetch(request).await {
                Ok(response) => {
                    if response.is_ok() {
                        self.remember(request, &response).await;
                    }
                    reply(response, strategy, ResponseSource::Network)
                }
                Err(e) => {
                    warn!("Network request failed for {}: {}", request.url, e);
                    self.offline(request, strategy).await
                }
            },
        }
    }
}

fn reply(response: CachedResponse, strategy: Strategy, source: ResponseSource) -> FetchReply {
    FetchReply {
        response,
        strategy,
        source,
        revalidation: None,
    }
}

/// Detached refresh for stale-while-revalidate.
async fn revalidate(
    fetcher: Arc<dyn Fetcher>,
    store: Arc<dyn CacheStore>,
    partition: String,
    request: FetchRequest,
) {
    match fetcher.fetch(&request).await {
        Ok(response) if response.is_ok() => {
            if let Err(e) = store.put(&partition, &request.cache_key(), response).await {
                warn!("Failed to refresh {}: {}", request.url, e);
            }
        }
        Ok(response) => debug!("Not refreshing {}: status {}", request.url, response.status),
        Err(e) => warn!("Background refresh failed for {}: {}", request.url, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::request::FetchRequest;
    use crate::offline::store::MemoryCacheStore;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Serves bodies from a map; unknown paths answer 404. Can be switched offline.
    #[derive(Default)]
    struct MockFetcher {
        bodies: Mutex<HashMap<String, String>>,
        offline: AtomicBool,
        calls: AtomicUsize,
    }

    impl MockFetcher {
        fn serving_precache() -> Self {
            let fetcher = Self::default();
            for path in OfflineConfig::PRECACHE_ASSETS {
                fetcher.set(path, &format!("asset {}", path));
            }
            fetcher
        }

        fn set(&self, path: &str, body: &str) {
            self.bodies
                .lock()
                .unwrap()
                .insert(path.to_string(), body.to_string());
        }

        fn go_offline(&self) {
            self.offline.store(true, Ordering::SeqCst);
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.offline.load(Ordering::SeqCst) {
                return Err(CampusError::Network {
                    message: "connection refused".to_string(),
                    cause: None,
                });
            }
            let body = self.bodies.lock().unwrap().get(request.url.path()).cloned();
            Ok(match body {
                Some(body) => CachedResponse::new(200, "text/plain", body),
                None => CachedResponse::new(404, "text/plain", "missing"),
            })
        }
    }

    fn origin() -> Url {
        Url::parse("http://localhost:8000").unwrap()
    }

    fn url(path: &str) -> Url {
        origin().join(path).unwrap()
    }

    fn worker(fetcher: &Arc<MockFetcher>, store: &Arc<MemoryCacheStore>) -> ServiceWorker {
        ServiceWorker::new(
            WorkerConfig::new(origin()),
            Arc::clone(fetcher) as Arc<dyn Fetcher>,
            Arc::clone(store) as Arc<dyn CacheStore>,
        )
    }

    async fn active_worker(
        fetcher: &Arc<MockFetcher>,
        store: &Arc<MemoryCacheStore>,
    ) -> ServiceWorker {
        let mut sw = worker(fetcher, store);
        sw.install().await.unwrap();
        sw.activate().await.unwrap();
        sw
    }

    fn handled(outcome: FetchOutcome) -> FetchReply {
        match outcome {
            FetchOutcome::Handled(reply) => reply,
            FetchOutcome::Passthrough => panic!("expected the worker to handle the request"),
        }
    }

    #[test]
    fn test_cache_names() {
        let names = CacheNames::default();
        assert_eq!(names.version, "die-pwa-v1.0.0");
        assert_eq!(names.static_cache, "die-static-v1.0.0");
        assert_eq!(names.dynamic_cache, "die-dynamic-v1.0.0");
        assert!(names.owns("die-dynamic-v1.0.0"));
        assert!(!names.owns("die-dynamic-v0.9.0"));
    }

    #[test]
    fn test_message_parsing() {
        assert_eq!(WorkerMessage::parse("SKIP_WAITING"), WorkerMessage::SkipWaiting);
        assert_eq!(
            WorkerMessage::parse("PING"),
            WorkerMessage::Other("PING".to_string())
        );
    }

    #[tokio::test]
    async fn test_install_precaches_assets() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let mut sw = worker(&fetcher, &store);

        let report = sw.install().await.unwrap();
        assert_eq!(report.precached, OfflineConfig::PRECACHE_ASSETS.len());
        assert!(report.skip_waiting);
        assert_eq!(sw.state(), WorkerState::Installed);
        assert!(!sw.is_waiting());
        assert_eq!(
            store.entry_count("die-static-v1.0.0").await.unwrap(),
            OfflineConfig::PRECACHE_ASSETS.len()
        );
    }

    #[tokio::test]
    async fn test_install_is_all_or_nothing() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        fetcher.bodies.lock().unwrap().remove("/js/pwa.js");
        let store = Arc::new(MemoryCacheStore::new());
        let mut sw = worker(&fetcher, &store);

        let report = sw.install().await.unwrap();
        assert_eq!(report.precached, 0);
        assert!(!report.skip_waiting);
        assert!(sw.is_waiting());
        assert!(store.partitions().await.unwrap().is_empty());

        sw.handle_message(WorkerMessage::SkipWaiting);
        assert!(!sw.is_waiting());
    }

    #[tokio::test]
    async fn test_install_twice_is_rejected() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let mut sw = worker(&fetcher, &store);
        sw.install().await.unwrap();
        assert!(matches!(
            sw.install().await,
            Err(CampusError::Lifecycle { .. })
        ));
    }

    #[tokio::test]
    async fn test_activate_requires_install() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let mut sw = worker(&fetcher, &store);
        assert!(matches!(
            sw.activate().await,
            Err(CampusError::Lifecycle { .. })
        ));
        assert_eq!(sw.state(), WorkerState::Parsed);
    }

    #[tokio::test]
    async fn test_activate_removes_stale_partitions() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let old = CachedResponse::new(200, "text/plain", "old");
        store.put("die-static-v0.9.0", "k1", old.clone()).await.unwrap();
        store.put("die-dynamic-v0.9.0", "k2", old).await.unwrap();

        let mut sw = worker(&fetcher, &store);
        sw.install().await.unwrap();
        let report = sw.activate().await.unwrap();

        assert_eq!(report.deleted, vec!["die-static-v0.9.0", "die-dynamic-v0.9.0"]);
        assert_eq!(sw.state(), WorkerState::Activated);
        assert!(sw.clients_claimed());
        assert_eq!(store.partitions().await.unwrap(), vec!["die-static-v1.0.0"]);
    }

    #[tokio::test]
    async fn test_passthrough_rules() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());

        let idle = worker(&fetcher, &store);
        let req = FetchRequest::get(url("/api/courses"));
        assert!(matches!(idle.handle_fetch(&req).await, FetchOutcome::Passthrough));

        let sw = active_worker(&fetcher, &store).await;
        let post = FetchRequest::get(url("/api/chat")).with_method("POST");
        assert!(matches!(sw.handle_fetch(&post).await, FetchOutcome::Passthrough));

        let foreign = FetchRequest::get(Url::parse("https://cdn.example.com/three.js").unwrap());
        assert!(matches!(sw.handle_fetch(&foreign).await, FetchOutcome::Passthrough));
    }

    #[tokio::test]
    async fn test_cache_first_hit_skips_network() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;
        let before = fetcher.calls();

        let reply = handled(sw.handle_fetch(&FetchRequest::get(url("/css/app.css"))).await);
        assert_eq!(reply.strategy, Strategy::CacheFirst);
        assert_eq!(reply.source, ResponseSource::Cache);
        assert_eq!(reply.response.body, "asset /css/app.css");
        assert_eq!(fetcher.calls(), before);
    }

    #[tokio::test]
    async fn test_cache_first_miss_fills_dynamic_cache() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        fetcher.set("/images/courses/cs.jpg", "jpeg");
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;

        let req = FetchRequest::image(url("/images/courses/cs.jpg"));
        let first = handled(sw.handle_fetch(&req).await);
        assert_eq!(first.source, ResponseSource::Network);
        assert_eq!(store.entry_count("die-dynamic-v1.0.0").await.unwrap(), 1);

        fetcher.go_offline();
        let second = handled(sw.handle_fetch(&req).await);
        assert_eq!(second.source, ResponseSource::Cache);
        assert_eq!(second.response.body, "jpeg");
    }

    #[tokio::test]
    async fn test_cache_first_does_not_store_errors() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;

        let reply = handled(sw.handle_fetch(&FetchRequest::image(url("/images/none.png"))).await);
        assert_eq!(reply.response.status, 404);
        assert_eq!(store.entry_count("die-dynamic-v1.0.0").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cache_first_offline_image_placeholder() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;
        fetcher.go_offline();

        let reply = handled(sw.handle_fetch(&FetchRequest::image(url("/images/x.jpg"))).await);
        assert_eq!(reply.source, ResponseSource::Offline);
        assert_eq!(reply.response.content_type(), Some("image/svg+xml"));
    }

    #[tokio::test]
    async fn test_network_first_reflects_fresh_body() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;
        let req = FetchRequest::get(url("/api/courses"));

        fetcher.set("/api/courses", "v1");
        let first = handled(sw.handle_fetch(&req).await);
        assert_eq!(first.strategy, Strategy::NetworkFirst);
        assert_eq!(first.response.body, "v1");

        fetcher.set("/api/courses", "v2");
        let second = handled(sw.handle_fetch(&req).await);
        assert_eq!(second.source, ResponseSource::Network);
        assert_eq!(second.response.body, "v2");
    }

    #[tokio::test]
    async fn test_network_first_falls_back_to_cache_then_offline() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        fetcher.set("/api/courses", "catalog");
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;

        handled(sw.handle_fetch(&FetchRequest::get(url("/api/courses"))).await);
        fetcher.go_offline();

        let cached = handled(sw.handle_fetch(&FetchRequest::get(url("/api/courses"))).await);
        assert_eq!(cached.source, ResponseSource::Cache);
        assert_eq!(cached.response.body, "catalog");

        let missing = handled(
            sw.handle_fetch(&FetchRequest::get(url("/api/courses/statistics")))
                .await,
        );
        assert_eq!(missing.source, ResponseSource::Offline);
        assert_eq!(missing.response.status, 503);
    }

    #[tokio::test]
    async fn test_offline_navigation_serves_start_page() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;
        fetcher.go_offline();

        let reply = handled(sw.handle_fetch(&FetchRequest::navigate(url("/about"))).await);
        assert_eq!(reply.source, ResponseSource::Offline);
        assert_eq!(reply.response.body, "asset /");
    }

    #[tokio::test]
    async fn test_stale_while_revalidate_serves_cache_and_refreshes() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;
        fetcher.set("/", "fresh home");

        let req = FetchRequest::navigate(url("/"));
        let reply = handled(sw.handle_fetch(&req).await);
        assert_eq!(reply.strategy, Strategy::StaleWhileRevalidate);
        assert_eq!(reply.source, ResponseSource::Cache);
        assert_eq!(reply.response.body, "asset /");

        reply.revalidation.unwrap().await.unwrap();
        let refreshed = store.lookup(&req.cache_key()).await.unwrap().unwrap();
        // The static partition is older and still wins the lookup.
        assert_eq!(refreshed.body, "asset /");
        assert_eq!(store.entry_count("die-dynamic-v1.0.0").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_stale_while_revalidate_miss_uses_network() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        fetcher.set("/about.html", "about");
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;

        let reply = handled(sw.handle_fetch(&FetchRequest::navigate(url("/about.html"))).await);
        assert_eq!(reply.source, ResponseSource::Network);
        assert!(reply.revalidation.is_none());
        assert_eq!(reply.response.body, "about");

        fetcher.set("/about.html", "about v2");
        let again = handled(sw.handle_fetch(&FetchRequest::navigate(url("/about.html"))).await);
        assert_eq!(again.source, ResponseSource::Cache);
        assert_eq!(again.response.body, "about");
        again.revalidation.unwrap().await.unwrap();

        let third = handled(sw.handle_fetch(&FetchRequest::navigate(url("/about.html"))).await);
        assert_eq!(third.response.body, "about v2");
    }

    #[tokio::test]
    async fn test_handle_all_runs_every_request() {
        let fetcher = Arc::new(MockFetcher::serving_precache());
        let store = Arc::new(MemoryCacheStore::new());
        let sw = active_worker(&fetcher, &store).await;

        let outcomes = sw
            .handle_all(&[
                FetchRequest::get(url("/js/app.js")),
                FetchRequest::get(url("/api/x")).with_method("DELETE"),
            ])
            .await;
        assert!(matches!(outcomes[0], FetchOutcome::Handled(_)));
        assert!(matches!(outcomes[1], FetchOutcome::Passthrough));
    }
}
