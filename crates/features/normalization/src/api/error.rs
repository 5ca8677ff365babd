use crate::error::NormalizationError;
use axum::http::StatusCode;
use lipi_kernel::prelude::ApiError;
use serde_json::{Value, json};

impl From<NormalizationError> for ApiError {
    fn from(err: NormalizationError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let details = details(&err);
        let api_error = Self::new(status, err.kind(), err.to_string());

        match details {
            Some(details) => api_error.with_details(details),
            None => api_error,
        }
    }
}

fn details(err: &NormalizationError) -> Option<Value> {
    match err {
        NormalizationError::UnsupportedLanguage { language, supported, .. } => {
            Some(json!({ "language": language, "supported": supported }))
        },
        NormalizationError::OptionsNotAllowed { language, .. }
        | NormalizationError::NormalizationFailed { language, .. } => {
            Some(json!({ "language": language }))
        },
        NormalizationError::InvalidOptions { language, issues, .. } => {
            Some(json!({ "language": language, "issues": issues }))
        },
        NormalizationError::Internal { .. } => None,
    }
}
