//! HTTP error mapping for registry outcomes.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use depot_registry::RegistryError;
use serde::Serialize;
use thiserror::Error;

/// Body returned with client-error responses that carry a reason.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// Errors a handler can produce, each with a fixed HTTP rendering:
///
/// - validation failure → 400 with `{message}`,
/// - conflict → 403, empty body,
/// - not found → 404, empty body,
/// - internal → 500, empty body (detail goes to the log, not the client),
/// - undecodable request payload → 400 with `{message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Payload(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Registry(RegistryError::Validation(err)) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: err.to_string(),
                }),
            )
                .into_response(),
            ApiError::Registry(RegistryError::Conflict(name)) => {
                tracing::debug!(package = %name, "rejected duplicate registration");
                StatusCode::FORBIDDEN.into_response()
            }
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND.into_response(),
            ApiError::Registry(RegistryError::Internal(report)) => {
                tracing::error!(error = %report, "registry operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            ApiError::Payload(rejection) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    message: rejection.body_text(),
                }),
            )
                .into_response(),
        }
    }
}
