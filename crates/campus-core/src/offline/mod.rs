//! Client caching layer.
//!
//! Models the background worker that sits between the browser and the network:
//! every same-origin GET is classified by URL into a [`Strategy`] and resolved
//! from the cache, the network or an offline fallback.
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_core::offline::{
//!     FetchOutcome, FetchRequest, HttpFetcher, MemoryCacheStore, ServiceWorker, WorkerConfig,
//! };
//! use std::sync::Arc;
//! use url::Url;
//!
//! # async fn example() -> campus_core::Result<()> {
//! let origin = Url::parse("http://localhost:8000").unwrap();
//! let mut worker = ServiceWorker::new(
//!     WorkerConfig::new(origin.clone()),
//!     Arc::new(HttpFetcher::new()),
//!     Arc::new(MemoryCacheStore::new()),
//! );
//! worker.install().await?;
//! worker.activate().await?;
//!
//! let request = FetchRequest::get(origin.join("/api/courses").unwrap());
//! if let FetchOutcome::Handled(reply) = worker.handle_fetch(&request).await {
//!     println!("{} from {:?}", reply.response.status, reply.source);
//! }
//! # Ok(())
//! # }
//! ```

mod fallback;
mod fetcher;
mod request;
mod store;
mod strategy;
mod worker;

pub use fallback::{offline_error, offline_image, offline_page, offline_response};
pub use fetcher::{Fetcher, HttpFetcher};
pub use request::{CachedResponse, Destination, FetchRequest, RequestMode};
pub use store::{CacheStore, MemoryCacheStore};
pub use strategy::{Strategy, StrategyTable};
pub use worker::{
    ActivationReport, CacheNames, FetchOutcome, FetchReply, InstallReport, ResponseSource,
    ServiceWorker, WorkerConfig, WorkerMessage, WorkerState,
};
