//! Responses served when neither the cache nor the network can answer.

use super::request::{CachedResponse, Destination, FetchRequest};
use super::store::CacheStore;
use crate::config::OfflineConfig;
use tracing::warn;

const OFFLINE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>DIE - Offline</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            padding: 20px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            text-align: center;
        }
        .container {
            max-width: 400px;
            padding: 40px;
            background: rgba(255, 255, 255, 0.1);
            border-radius: 20px;
        }
        button {
            background: white;
            color: #667eea;
            border: none;
            padding: 12px 24px;
            border-radius: 8px;
            font-weight: bold;
            cursor: pointer;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>You're Offline</h1>
        <p>It looks like you're not connected to the internet. You can still browse cached content.</p>
        <button onclick="window.location.reload()">Try Again</button>
    </div>
</body>
</html>
"#;

const OFFLINE_IMAGE_SVG: &str = r##"<svg width="200" height="150" xmlns="http://www.w3.org/2000/svg">
    <rect width="200" height="150" fill="#f3f4f6"/>
    <text x="100" y="75" text-anchor="middle" fill="#9ca3af" font-family="Arial, sans-serif" font-size="14">
        Image unavailable offline
    </text>
</svg>
"##;

/// Self-contained page shown for navigations while offline.
pub fn offline_page() -> CachedResponse {
    CachedResponse::new(200, "text/html", OFFLINE_HTML)
}

/// Placeholder returned for images while offline.
pub fn offline_image() -> CachedResponse {
    CachedResponse::new(200, "image/svg+xml", OFFLINE_IMAGE_SVG)
}

/// Explicit failure for everything else.
pub fn offline_error() -> CachedResponse {
    CachedResponse::new(503, "text/plain", "Offline")
}

/// Pick the degraded response for a request that could not be served.
///
/// Navigations get the cached start page when there is one, otherwise the
/// offline page.
pub async fn offline_response(store: &dyn CacheStore, request: &FetchRequest) -> CachedResponse {
    if request.is_navigation() {
        if let Ok(start) = request.url.join(OfflineConfig::START_URL) {
            match store.lookup(start.as_str()).await {
                Ok(Some(cached)) => return cached,
                Ok(None) => {}
                Err(e) => warn!("Start page lookup failed: {}", e),
            }
        }
        return offline_page();
    }

    if request.destination == Destination::Image {
        return offline_image();
    }

    offline_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::store::MemoryCacheStore;
    use url::Url;

    fn url(path: &str) -> Url {
        Url::parse("http://localhost").unwrap().join(path).unwrap()
    }

    #[tokio::test]
    async fn test_navigation_gets_offline_page() {
        let store = MemoryCacheStore::new();
        let resp = offline_response(&store, &FetchRequest::navigate(url("/about"))).await;
        assert_eq!(resp.status, 200);
        assert_eq!(resp.content_type(), Some("text/html"));
        assert!(String::from_utf8_lossy(&resp.body).contains("You're Offline"));
    }

    #[tokio::test]
    async fn test_navigation_prefers_cached_start_page() {
        let store = MemoryCacheStore::new();
        store
            .put("static", url("/").as_str(), CachedResponse::new(200, "text/html", "home"))
            .await
            .unwrap();
        let resp = offline_response(&store, &FetchRequest::navigate(url("/about"))).await;
        assert_eq!(resp.body, "home");
    }

    #[tokio::test]
    async fn test_image_and_other_fallbacks() {
        let store = MemoryCacheStore::new();
        let img = offline_response(&store, &FetchRequest::image(url("/images/x.jpg"))).await;
        assert_eq!(img.content_type(), Some("image/svg+xml"));
        assert_eq!(img.status, 200);

        let api = offline_response(&store, &FetchRequest::get(url("/api/courses"))).await;
        assert_eq!(api.status, 503);
        assert_eq!(api.body, "Offline");
    }
}
