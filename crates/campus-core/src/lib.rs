//! Campus Core - Headless library behind the DIE campus site.
//!
//! This crate holds the course catalog, the query service that answers the JSON
//! API, the rule-based assistant tables, the per-session widget state and the
//! offline caching layer. It has no HTTP server of its own; see `campus-server`.
//!
//! # Example
//!
//! ```rust,ignore
//! use campus_core::{Catalog, QueryService, SearchFilters};
//! use std::sync::Arc;
//!
//! fn main() -> campus_core::Result<()> {
//!     let queries = QueryService::new(Arc::new(Catalog::seeded()));
//!
//!     let course = queries.get_by_id(1)?;
//!     println!("{} ({})", course.title, course.tuition_fee);
//!
//!     let found = queries.search(SearchFilters {
//!         query: "science".into(),
//!         ..Default::default()
//!     });
//!     println!("Search found {} courses", found.total);
//!
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod offline;
pub mod query;
pub mod session;

// Re-export commonly used types
pub use assistant::{campus_info, interpret_command, voice_search, ChatResponder};
pub use catalog::Catalog;
pub use error::{CampusError, FieldErrors, Result};
pub use models::{
    ApplicationForm, ApplicationReceipt, Course, CourseLevel, CourseStatistics,
    RecommendationCriteria, Recommendations, SearchFilters, SearchResult,
};
pub use query::QueryService;
