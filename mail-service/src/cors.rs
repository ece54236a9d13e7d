use axum::Json;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, Request, StatusCode, header::HeaderName};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::sync::Arc;

use crate::app::AppState;

const PRE_FLIGHT_MAX_AGE: &str = "600";

#[derive(Clone, Debug)]
pub struct Cors {
    allowed: Vec<String>,
}

impl Cors {
    pub fn new(allowed: Vec<String>) -> Self {
        Self { allowed }
    }

    fn wildcard(&self) -> bool {
        self.allowed.iter().any(|value| value == "*")
    }

    fn allow_all(&self) -> bool {
        self.allowed.is_empty() || self.wildcard()
    }

    pub fn is_origin_allowed(&self, origin: Option<&str>) -> bool {
        if self.allow_all() {
            return true;
        }
        origin
            .map(|value| self.allowed.iter().any(|allowed| allowed == value))
            .unwrap_or(false)
    }

    pub fn build_headers(&self, origin: Option<&str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("vary"),
            HeaderValue::from_static("Origin"),
        );
        let Some(origin) = origin.filter(|value| self.is_origin_allowed(Some(value))) else {
            return headers;
        };
        let allow_origin = if self.wildcard() {
            HeaderValue::from_static("*")
        } else {
            HeaderValue::from_str(origin).unwrap_or_else(|_| HeaderValue::from_static("*"))
        };
        headers.insert(
            HeaderName::from_static("access-control-allow-origin"),
            allow_origin,
        );
        headers.insert(
            HeaderName::from_static("access-control-allow-methods"),
            HeaderValue::from_static("GET,POST,OPTIONS"),
        );
        headers.insert(
            HeaderName::from_static("access-control-allow-headers"),
            HeaderValue::from_static("content-type,x-request-id"),
        );
        headers
    }
}

fn request_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get("origin")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

/// Answers preflights, rejects disallowed origins, and decorates every response.
pub async fn apply_cors(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = request_origin(request.headers());
    let cors_headers = state.cors.build_headers(origin.as_deref());

    if origin.is_some() && !state.cors.is_origin_allowed(origin.as_deref()) {
        state.logger.warn(
            "cors.origin_denied",
            json!({ "origin": origin, "path": request.uri().path() }),
        );
        let mut response = (
            StatusCode::FORBIDDEN,
            Json(json!({ "error": "Origin not allowed" })),
        )
            .into_response();
        response.headers_mut().extend(cors_headers);
        return response;
    }

    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        response.headers_mut().extend(cors_headers);
        response.headers_mut().insert(
            HeaderName::from_static("access-control-max-age"),
            HeaderValue::from_static(PRE_FLIGHT_MAX_AGE),
        );
        return response;
    }

    let mut response = next.run(request).await;
    response.headers_mut().extend(cors_headers);
    response
}
