//! `GET /networks` handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_domain::network::Network;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Network>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /networks` — networks visible from the access point, in scan order.
pub async fn list<S, W>(State(state): State<AppState<S, W>>) -> Result<ListResponse, ApiError>
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    let networks = state.provisioning.scan().await?;
    Ok(ListResponse::Ok(Json(networks)))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::testing::{StubScanner, sample_networks, test_state, test_state_with};

    fn get_networks() -> Request<Body> {
        Request::builder()
            .uri("/networks")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn should_list_scanned_networks() {
        let (state, _) = test_state();
        let app = crate::api::routes().with_state(state);

        let response = app.oneshot(get_networks()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[0]["ssid"], "office");
        assert_eq!(json[0]["rssi"], -71);
        assert_eq!(json[0]["encryption"], "encrypted");
        assert_eq!(json[1]["encryption"], "open");
        assert_eq!(json.as_array().unwrap().len(), sample_networks().len());
    }

    #[tokio::test]
    async fn should_return_empty_array_when_nothing_in_range() {
        let (state, _) = test_state_with(StubScanner {
            networks: vec![],
            fail: false,
        });
        let app = crate::api::routes().with_state(state);

        let response = app.oneshot(get_networks()).await.unwrap();

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn should_return_internal_error_when_scan_fails() {
        let (state, _) = test_state_with(StubScanner {
            networks: vec![],
            fail: true,
        });
        let app = crate::api::routes().with_state(state);

        let response = app.oneshot(get_networks()).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
