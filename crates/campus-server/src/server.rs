//! HTTP server implementation using Axum.

use crate::handlers::{
    applications, assistant, courses, handle_health, handle_not_found,
};
use axum::{
    routing::{get, post},
    Router,
};
use campus_core::{Catalog, ChatResponder, QueryService};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Read-only queries over the catalog
    pub queries: QueryService,
    /// Keyword table answering `/api/chat`
    pub chat: ChatResponder,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            queries: QueryService::new(Arc::new(catalog)),
            chat: ChatResponder::api(),
        }
    }
}

/// Build the router with every API route.
///
/// Paths outside the API are served from `public_dir` when one is given, and
/// answered with a JSON 404 otherwise.
pub fn build_router(state: Arc<AppState>, public_dir: Option<PathBuf>) -> Router {
    // Permissive CORS, same as the development setup
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handle_health))
        .route("/api/courses", get(courses::handle_index))
        .route("/api/courses/search", get(courses::handle_search))
        .route("/api/courses/categories", get(courses::handle_categories))
        .route("/api/courses/levels", get(courses::handle_levels))
        .route("/api/courses/featured", get(courses::handle_featured))
        .route("/api/courses/statistics", get(courses::handle_statistics))
        .route(
            "/api/courses/recommendations",
            get(courses::handle_recommendations),
        )
        .route("/api/courses/:id", get(courses::handle_show))
        .route("/api/courses/:id/apply", post(applications::handle_apply))
        .route("/api/chat", post(assistant::handle_chat))
        .route("/api/voice-search", post(assistant::handle_voice_search))
        .route("/api/campus-info", get(assistant::handle_campus_info));

    let app = match public_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.fallback(handle_not_found),
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
    .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    catalog: Catalog,
    public_dir: Option<PathBuf>,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState::new(catalog));
    let app = build_router(state, public_dir);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
