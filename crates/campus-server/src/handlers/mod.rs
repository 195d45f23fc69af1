//! HTTP request handlers, split by area.
//!
//! Every response body is a JSON object with a `success` flag. Failures carry a
//! `message` and, for validation failures, an `errors` map keyed by field.

pub mod applications;
pub mod assistant;
pub mod courses;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use campus_core::CampusError;
use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{error, warn};

// ============================================================================
// Error responses
// ============================================================================

/// A library error on its way to becoming an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub CampusError);

impl From<CampusError> for ApiError {
    fn from(err: CampusError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected ({}): {}", status.as_u16(), self.0);
        }

        let mut body = json!({
            "success": false,
            "message": self.0.to_string(),
        });
        if let Some(errors) = self.0.field_errors() {
            body["errors"] = json!(errors);
        }

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// ============================================================================
// Query-string helpers
// ============================================================================

/// Decoded query-string pairs in request order.
///
/// Repeated keys are kept, so both `interests[]=a&interests[]=b` and
/// `interests=a` can be read back as lists.
#[derive(Debug, Default)]
pub(crate) struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    /// Last value for `name`, or an empty string.
    pub(crate) fn text(&self, name: &str) -> String {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.trim().to_string())
            .unwrap_or_default()
    }

    /// Every value given as `name[]` or `name`.
    pub(crate) fn list(&self, name: &str) -> Vec<String> {
        let bracketed = format!("{}[]", name);
        self.pairs
            .iter()
            .filter(|(k, _)| k == name || *k == bracketed)
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Optional non-negative integer. Blank means absent.
    pub(crate) fn amount(&self, name: &str) -> Result<Option<u64>, CampusError> {
        let value = self.text(name);
        if value.is_empty() {
            return Ok(None);
        }
        value
            .parse::<u64>()
            .map(Some)
            .map_err(|_| CampusError::InvalidParam {
                field: name.to_string(),
                message: format!("'{}' is not a whole number", value),
            })
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// Decode a POST body sent as JSON or as an urlencoded form.
///
/// A blank body decodes to `T::default()`. Anything undecodable is an
/// `InvalidParam` on `body`, so it is answered with the usual JSON envelope.
pub(crate) fn decode_body<T>(headers: &HeaderMap, body: &[u8]) -> Result<T, CampusError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let is_form = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

    let decoded = if is_form {
        let fields: Map<String, Value> = url::form_urlencoded::parse(body)
            .into_owned()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        serde_json::from_value(Value::Object(fields))
    } else {
        serde_json::from_slice(body)
    };

    decoded.map_err(|e| CampusError::InvalidParam {
        field: "body".to_string(),
        message: e.to_string(),
    })
}

/// Current time in the ISO 8601 form used for response timestamps.
pub(crate) fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// Misc handlers
// ============================================================================

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Fallback for unknown paths when no static directory is configured.
pub async fn handle_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"success": false, "message": "Not found"})),
    )
}
