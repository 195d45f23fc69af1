//! Centralized configuration for the campus site.
//!
//! This module provides configuration constants for the HTTP server, the query
//! service, application validation and the offline caching layer.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "DIE Campus";
    pub const CONTACT_EMAIL: &'static str = "info@die.edu";
    pub const CONTACT_PHONE: &'static str = "+94 11 234 5678";
    pub const LOCATION: &'static str = "Colombo, Sri Lanka";
}

/// HTTP server defaults.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8000;
    pub const PORT_ANNOUNCE_PREFIX: &'static str = "SERVER_PORT=";
}

/// Limits used by the query service.
pub struct QueryConfig;

impl QueryConfig {
    /// Number of courses returned by `featured()`.
    pub const FEATURED_COUNT: usize = 3;
    /// Maximum number of recommendations returned.
    pub const RECOMMENDATION_LIMIT: usize = 5;
}

/// Validation limits for course applications.
pub struct ApplicationConfig;

impl ApplicationConfig {
    pub const FULL_NAME_MAX: usize = 255;
    pub const EMAIL_MAX: usize = 255;
    pub const PHONE_MAX: usize = 20;
    pub const ADDRESS_MAX: usize = 500;
    pub const EDUCATION_MAX: usize = 1000;
    pub const MOTIVATION_MAX: usize = 1000;
    pub const DOCUMENT_MAX_BYTES: u64 = 5 * 1024 * 1024; // 5MB
    pub const DOCUMENT_EXTENSIONS: &'static [&'static str] = &["pdf", "doc", "docx"];
    pub const ID_PREFIX: &'static str = "APP-";
    pub const INITIAL_STATUS: &'static str = "pending";
}

/// Offline caching layer configuration.
pub struct OfflineConfig;

impl OfflineConfig {
    pub const CACHE_PREFIX: &'static str = "die";
    pub const CACHE_VERSION: &'static str = "v1.0.0";
    /// Start page looked up when a navigation request cannot be served.
    pub const START_URL: &'static str = "/";
    /// Assets cached at install time.
    pub const PRECACHE_ASSETS: &'static [&'static str] = &[
        "/",
        "/css/app.css",
        "/css/dark-mode.css",
        "/js/app.js",
        "/js/dark-mode.js",
        "/js/threejs-campus.js",
        "/js/voice-search.js",
        "/js/chatbot.js",
        "/js/pwa.js",
        "/js/animations.js",
        "/manifest.json",
        "/icons/icon-192x192.png",
        "/icons/icon-512x512.png",
    ];
}
