//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sensordash_domain::error::SensordashError;
use sensordash_domain::provisioning::ConnectResponse;

/// Message sent when a request body is not valid JSON.
pub const INVALID_JSON: &str = "Invalid JSON";

/// Maps [`SensordashError`] to an HTTP response with appropriate status code.
///
/// The body always has the `{"success": false, "message": ...}` shape the
/// portal page expects.
#[derive(Debug)]
pub struct ApiError(SensordashError);

impl From<SensordashError> for ApiError {
    fn from(err: SensordashError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SensordashError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SensordashError::Decode(_) => (StatusCode::BAD_REQUEST, INVALID_JSON.to_string()),
            SensordashError::Device(err) => {
                tracing::error!(error = %err, "device error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ConnectResponse::rejected(message))).into_response()
    }
}
