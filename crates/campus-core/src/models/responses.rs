//! Result types returned by the query service.

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filters accepted by course search. Empty strings and `None` are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub max_fee: Option<u64>,
}

impl SearchFilters {
    /// True when no filter would remove anything.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
            && self.category.is_empty()
            && self.level.is_empty()
            && self.max_fee.is_none()
    }
}

/// Courses matching a search, with the filters echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub courses: Vec<Course>,
    pub total: usize,
    pub filters_applied: SearchFilters,
}

/// Aggregate figures over the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CourseStatistics {
    pub total_courses: usize,
    pub total_seats: u64,
    pub categories: BTreeMap<String, usize>,
    pub levels: BTreeMap<String, usize>,
    /// Mean of the parsed tuition amounts, 0 for an empty catalog.
    pub average_fee: f64,
}

/// Preferences driving recommendations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCriteria {
    #[serde(default)]
    pub interests: Vec<String>,
    /// Maximum tuition amount; 0 means no budget limit.
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub level: String,
}

/// A recommended course, scored when interests were supplied.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub course: Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<u32>,
}

/// Recommended courses with the criteria echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub courses: Vec<Recommendation>,
    pub criteria: RecommendationCriteria,
}
