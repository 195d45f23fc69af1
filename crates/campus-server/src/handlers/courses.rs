//! Course catalog endpoints.

use super::{ApiResult, QueryParams};
use crate::server::AppState;
use axum::{
    extract::{Path, RawQuery, State},
    response::IntoResponse,
    Json,
};
use campus_core::{RecommendationCriteria, SearchFilters};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Path ids that are not numbers can never match a course.
pub(crate) fn parse_course_id(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// `GET /api/courses`
pub async fn handle_index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let courses = state.queries.get_all();
    Json(json!({
        "success": true,
        "data": courses,
        "total": courses.len(),
    }))
}

/// `GET /api/courses/{id}`
pub async fn handle_show(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let course = state.queries.get_by_id(parse_course_id(&id))?;
    Ok(Json(json!({
        "success": true,
        "data": course,
    })))
}

/// `GET /api/courses/search?q=&category=&level=&max_fee=`
pub async fn handle_search(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<impl IntoResponse> {
    let params = QueryParams::parse(raw.as_deref());
    let filters = SearchFilters {
        query: params.text("q"),
        category: params.text("category"),
        level: params.text("level"),
        max_fee: params.amount("max_fee")?,
    };
    debug!("Searching courses with {:?}", filters);

    let result = state.queries.search(filters);
    Ok(Json(json!({
        "success": true,
        "data": result.courses,
        "total": result.total,
        "filters_applied": result.filters_applied,
    })))
}

/// `GET /api/courses/categories`
pub async fn handle_categories(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": state.queries.categories(),
    }))
}

/// `GET /api/courses/levels`
pub async fn handle_levels(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": state.queries.levels(),
    }))
}

/// `GET /api/courses/featured`
pub async fn handle_featured(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": state.queries.featured(),
    }))
}

/// `GET /api/courses/statistics`
pub async fn handle_statistics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "success": true,
        "data": state.queries.statistics(),
    }))
}

/// `GET /api/courses/recommendations?interests[]=&budget=&level=`
pub async fn handle_recommendations(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> ApiResult<impl IntoResponse> {
    let params = QueryParams::parse(raw.as_deref());
    let criteria = RecommendationCriteria {
        interests: params.list("interests"),
        budget: params.amount("budget")?.unwrap_or(0),
        level: params.text("level"),
    };
    debug!("Recommending courses for {:?}", criteria);

    let recommendations = state.queries.recommend(criteria);
    Ok(Json(json!({
        "success": true,
        "data": recommendations.courses,
        "criteria": recommendations.criteria,
    })))
}

