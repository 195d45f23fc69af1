//! Stateless query service over the course catalog.
//!
//! Every operation is a linear scan over the catalog. Nothing here mutates state,
//! so one [`QueryService`] can serve any number of concurrent requests.

mod recommend;
mod stats;

use crate::catalog::Catalog;
use crate::config::QueryConfig;
use crate::error::{CampusError, Result};
use crate::models::{
    contains_ci, ApplicationForm, ApplicationReceipt, Course, CourseStatistics,
    RecommendationCriteria, Recommendations, SearchFilters, SearchResult,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Read-only operations over a shared catalog.
#[derive(Debug, Clone)]
pub struct QueryService {
    catalog: Arc<Catalog>,
}

impl QueryService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Every course, in storage order.
    pub fn get_all(&self) -> &[Course] {
        self.catalog.courses()
    }

    /// Look up a course by id.
    pub fn get_by_id(&self, id: u32) -> Result<&Course> {
        self.catalog
            .courses()
            .iter()
            .find(|c| c.id == id)
            .ok_or(CampusError::CourseNotFound { id })
    }

    /// Filter the catalog. Filters combine with AND; empty ones are skipped.
    ///
    /// A `max_fee` of 0 is treated as absent, matching how the budget works for
    /// recommendations.
    pub fn search(&self, filters: SearchFilters) -> SearchResult {
        let max_fee = filters.max_fee.filter(|fee| *fee > 0);
        let courses: Vec<Course> = self
            .catalog
            .courses()
            .iter()
            .filter(|c| {
                filters.query.is_empty()
                    || contains_ci(&c.title, &filters.query)
                    || contains_ci(&c.description, &filters.query)
                    || contains_ci(&c.category, &filters.query)
            })
            .filter(|c| filters.category.is_empty() || contains_ci(&c.category, &filters.category))
            .filter(|c| filters.level.is_empty() || contains_ci(c.level.as_str(), &filters.level))
            .filter(|c| max_fee.map_or(true, |max| c.tuition_amount() <= max))
            .cloned()
            .collect();

        debug!("Search {:?} matched {} courses", filters, courses.len());

        SearchResult {
            total: courses.len(),
            courses,
            filters_applied: filters,
        }
    }

    /// Distinct categories, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for course in self.catalog.courses() {
            if !seen.contains(&course.category) {
                seen.push(course.category.clone());
            }
        }
        seen
    }

    /// Distinct levels, first-seen order.
    pub fn levels(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for course in self.catalog.courses() {
            let level = course.level.as_str();
            if !seen.iter().any(|l| l == level) {
                seen.push(level.to_string());
            }
        }
        seen
    }

    /// The first few courses in storage order. Positional, not a ranking.
    pub fn featured(&self) -> &[Course] {
        let courses = self.catalog.courses();
        &courses[..courses.len().min(QueryConfig::FEATURED_COUNT)]
    }

    pub fn statistics(&self) -> CourseStatistics {
        stats::compute(self.catalog.courses())
    }

    pub fn recommend(&self, criteria: RecommendationCriteria) -> Recommendations {
        recommend::recommend(self.catalog.courses(), criteria)
    }

    /// Validate an application for a course and produce its receipt.
    ///
    /// The course is resolved first, so an unknown id is reported as not found even
    /// when the form is also invalid.
    pub fn apply(
        &self,
        id: u32,
        form: ApplicationForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<ApplicationReceipt> {
        let course = self.get_by_id(id)?;
        self.submit(course, form, submitted_at)
    }

    /// Validate an application for a course that has already been resolved.
    pub fn submit(
        &self,
        course: &Course,
        form: ApplicationForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<ApplicationReceipt> {
        let submission = form.validate()?;
        let receipt = ApplicationReceipt::new(&course.title, &submission, submitted_at);
        info!(
            "Application {} received for course {} ({})",
            receipt.application_id, course.id, course.title
        );
        Ok(receipt)
    }
}
