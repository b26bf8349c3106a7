//! `POST /connect` handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_domain::error::{DecodeError, SensordashError};
use sensordash_domain::provisioning::{ConnectRequest, ConnectResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Message sent when the request carries no body at all.
pub const NO_DATA: &str = "No data";

/// Possible responses from the connect endpoint.
pub enum SubmitResponse {
    Accepted(Json<ConnectResponse>),
    NoData,
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Accepted(json) => json.into_response(),
            Self::NoData => (
                StatusCode::BAD_REQUEST,
                Json(ConnectResponse::rejected(NO_DATA)),
            )
                .into_response(),
        }
    }
}

/// `POST /connect` — queue a connection attempt with the submitted credentials.
///
/// The body is read as text so an unparsable payload still gets the portal's
/// JSON error shape instead of axum's plain-text rejection.
pub async fn submit<S, W>(
    State(state): State<AppState<S, W>>,
    body: String,
) -> Result<SubmitResponse, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    if body.trim().is_empty() {
        return Ok(SubmitResponse::NoData);
    }

    let raw: ConnectRequest = serde_json::from_str(&body)
        .map_err(|err| SensordashError::from(DecodeError::from(err)))?;
    let request = ConnectRequest::new(&raw.ssid, raw.password);

    let response = state.provisioning.connect(request).await?;
    Ok(SubmitResponse::Accepted(Json(response)))
}
