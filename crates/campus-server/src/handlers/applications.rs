//! Course application endpoint.

use super::courses::parse_course_id;
use super::{decode_body, ApiResult};
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use campus_core::ApplicationForm;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

/// `POST /api/courses/{id}/apply`
pub async fn handle_apply(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<impl IntoResponse> {
    // Unknown courses are reported before the body is looked at
    let course = state.queries.get_by_id(parse_course_id(&id))?;

    // An empty body is an empty form, so every required field gets reported
    let form: ApplicationForm = decode_body(&headers, &body)?;
    let receipt = state.queries.submit(course, form, Utc::now())?;

    Ok(Json(json!({
        "success": true,
        "message": "Application submitted successfully",
        "data": receipt,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_application_with_documents() {
        let form: ApplicationForm = decode_body(
            &HeaderMap::new(),
            br#"{"full_name": "Ada", "documents": [{"file_name": "cv.pdf", "size_bytes": 10}]}"#,
        )
        .unwrap();
        assert_eq!(form.full_name.as_deref(), Some("Ada"));
        assert_eq!(form.documents.unwrap().len(), 1);
    }

    #[test]
    fn test_decode_empty_application() {
        let form: ApplicationForm = decode_body(&HeaderMap::new(), b"").unwrap();
        assert!(form.full_name.is_none());
        assert!(form.validate().is_err());
    }
}
