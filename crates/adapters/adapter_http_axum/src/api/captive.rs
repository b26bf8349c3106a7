//! `GET /captive-portal/api` handler (RFC 8908).

use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_domain::provisioning::CaptivePortalStatus;

use crate::state::AppState;

/// Media type mandated by RFC 8908.
pub const CAPTIVE_JSON: &str = "application/captive+json";

/// Possible responses from the status endpoint.
pub enum StatusResponse {
    Ok(CaptivePortalStatus),
}

impl IntoResponse for StatusResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(status) => {
                let mut response = Json(status).into_response();
                let headers = response.headers_mut();
                headers.insert(
                    header::CONTENT_TYPE,
                    header::HeaderValue::from_static(CAPTIVE_JSON),
                );
                headers.insert(
                    header::CACHE_CONTROL,
                    header::HeaderValue::from_static("private"),
                );
                response
            }
        }
    }
}

/// `GET /captive-portal/api` — tells the client OS whether it is behind the portal.
pub async fn status<S, W>(State(state): State<AppState<S, W>>) -> StatusResponse
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    StatusResponse::Ok(state.provisioning.captive_status())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::testing::test_state;

    fn get_status() -> Request<Body> {
        Request::builder()
            .uri("/captive-portal/api")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn should_report_captive_with_portal_url() {
        let (state, _) = test_state();
        let app = crate::api::routes().with_state(state);

        let response = app.oneshot(get_status()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/captive+json"
        );
        assert_eq!(response.headers()[header::CACHE_CONTROL], "private");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["captive"], true);
        assert_eq!(json["user-portal-url"], "http://192.168.4.1/");
    }

    #[tokio::test]
    async fn should_release_client_once_station_connected() {
        let (state, provisioner) = test_state();
        provisioner.connected.store(true, Ordering::SeqCst);
        let app = crate::api::routes().with_state(state);

        let response = app.oneshot(get_status()).await.unwrap();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["captive"], false);
    }
}
