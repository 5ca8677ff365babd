use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lipi_derive::api_model;
use serde_json::Value;
use std::fmt;

#[api_model]
/// Error envelope returned by every failing endpoint
pub struct ErrorBody {
    /// Stable machine-readable error kind
    pub kind: String,
    /// Human-readable description
    pub message: String,
    /// Structured detail, e.g. the rejected option fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "server", schema(value_type = Option<Object>))]
    pub details: Option<Value>,
}

/// An HTTP status paired with an [`ErrorBody`].
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody { kind: kind.into(), message: message.into(), details: None },
        }
    }

    /// 422 for requests that are well-formed HTTP but cannot be served.
    pub fn unprocessable(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, kind, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.body.details = Some(details);
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.body.kind, self.status, self.body.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Keeps axum's status for the rejection (400, 413, 415 or 422).
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), "invalid_request", rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn details_are_omitted_when_absent() {
        let err = ApiError::unprocessable("text_too_long", "too long");
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            serde_json::to_value(&err.body).unwrap(),
            json!({"kind": "text_too_long", "message": "too long"})
        );
    }

    #[test]
    fn details_are_serialized_verbatim() {
        let err = ApiError::internal("boom").with_details(json!({"stage": "apply"}));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "internal (500 Internal Server Error): boom");
        assert_eq!(serde_json::to_value(&err.body).unwrap()["details"], json!({"stage": "apply"}));
    }
}
