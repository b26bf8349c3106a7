//! HTTP client for the provisioning endpoints, built on `gloo-net`.

use gloo_net::http::{Request, Response};
use sensordash_app::ports::{PortalClient, TransportError};
use sensordash_domain::network::Network;
use sensordash_domain::provisioning::{ConnectRequest, ConnectResponse};

fn transport(err: gloo_net::Error) -> TransportError {
    TransportError::new(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
fn check_response(resp: Response) -> Result<Response, TransportError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(TransportError::new(format!("HTTP {}", resp.status())))
    }
}

/// [`PortalClient`] talking to the device that served the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPortalClient;

impl PortalClient for HttpPortalClient {
    async fn fetch_networks(&self) -> Result<Vec<Network>, TransportError> {
        let resp = check_response(Request::get("/networks").send().await.map_err(transport)?)?;
        resp.json().await.map_err(transport)
    }

    /// The device answers refusals with a 4xx status and the same JSON
    /// shape, so the body is decoded whatever the status.
    async fn connect(&self, request: &ConnectRequest) -> Result<ConnectResponse, TransportError> {
        let resp = Request::post("/connect")
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;
        serde_json::from_str(&body).map_err(|err| {
            leptos::logging::warn!("undecodable /connect answer (HTTP {status}): {err}");
            TransportError::new(err.to_string())
        })
    }
}
