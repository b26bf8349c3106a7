//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes and, when `assets_dir` is given, serves the compiled
/// dashboard from it with `index.html` as the fallback for client-side routes.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S, W>(state: AppState<S, W>, assets_dir: Option<&Path>) -> Router
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes());

    if let Some(dir) = assets_dir {
        tracing::info!(path = %dir.display(), "serving dashboard assets");
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
