//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<Json<T>, ApiError>`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mfr_recon_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client, so database detail never leaks.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: missing fields or an unreadable body.
    BadRequest(String),
    /// 500 Internal Server Error: details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Internal(err) => {
                let transient =
                    err.downcast_ref::<ServiceError>().is_some_and(ServiceError::is_transient);
                tracing::error!(error = ?err, transient, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_client_error() {
            Self::BadRequest(err.to_string())
        } else {
            Self::Internal(err.into())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfr_recon_storage::StorageError;

    #[test]
    fn test_missing_fields_is_bad_request() {
        let api: ApiError = ServiceError::MissingFields(vec!["name"]).into();
        assert_eq!(api.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_failure_is_internal() {
        let api: ApiError =
            ServiceError::Storage(StorageError::ForeignKey("fk_manufacturer".to_owned())).into();
        assert!(matches!(api, ApiError::Internal(_)));
        assert_eq!(api.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_keeps_service_error_for_transient_logging() {
        let api: ApiError =
            ServiceError::Storage(StorageError::from(sqlx::Error::PoolTimedOut)).into();
        let ApiError::Internal(err) = api else {
            panic!("expected internal error");
        };
        assert!(err.downcast_ref::<ServiceError>().is_some_and(ServiceError::is_transient));
    }
}
