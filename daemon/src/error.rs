//! HTTP error types and mappings
//!
//! Maps `CoreError` onto HTTP status codes and a JSON error body so the
//! orchestration core stays transport-agnostic. The core's stable error
//! code travels in the body's `code` field, not in the message text.

use altair_core::CoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// HTTP boundary error type
#[derive(Debug, Error)]
pub enum HttpError {
    /// Invalid input from the client
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        code: Option<String>,
    },

    /// A probe failed to complete; no partial report exists
    #[error("Probe fault: {message}")]
    ProbeFault {
        message: String,
        code: Option<String>,
    },

    /// Internal server error
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        code: Option<String>,
    },
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
    /// Stable error code for client-side handling
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        let code = Some(err.code().to_string());
        match err {
            CoreError::ValidationError(message) | CoreError::ConfigurationError(message) => {
                HttpError::BadRequest { message, code }
            }
            CoreError::ProbeFault(message) => HttpError::ProbeFault { message, code },
            other => HttpError::Internal {
                message: other.to_string(),
                code,
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message, code) = match self {
            HttpError::BadRequest { message, code } => (StatusCode::BAD_REQUEST, message, code),
            HttpError::ProbeFault { message, code } | HttpError::Internal { message, code } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, code)
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
            code,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn core_validation_maps_to_bad_request() {
        let err: HttpError = CoreError::ValidationError("bad map".to_string()).into();
        match err {
            HttpError::BadRequest { message, code } => {
                assert_eq!(message, "bad map");
                assert_eq!(code.as_deref(), Some("CORE002"));
            }
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn core_probe_fault_keeps_message_clean() {
        let err: HttpError = CoreError::ProbeFault("task died".to_string()).into();
        match err {
            HttpError::ProbeFault { message, code } => {
                assert_eq!(message, "task died");
                assert_eq!(code.as_deref(), Some("CORE004"));
            }
            other => panic!("expected ProbeFault, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn error_body_carries_the_stable_code() {
        let err: HttpError = CoreError::ProbeFault("task died".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "task died");
        assert_eq!(body["status"], 500);
        assert_eq!(body["code"], "CORE004");
    }

    #[tokio::test]
    async fn code_is_omitted_when_absent() {
        let err = HttpError::Internal {
            message: "boom".to_string(),
            code: None,
        };
        let bytes = err
            .into_response()
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body.get("code").is_none());
    }
}
