//! # sensordashd — sensordash daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars) and install logging
//! - Construct the simulated sensor and radio (adapters)
//! - Start the sampler that feeds the reading bus
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use sensordash_adapter_http_axum::state::AppState;
use sensordash_adapter_virtual::{VirtualBme280, VirtualRadio};
use sensordash_app::reading_bus::ReadingBus;
use sensordash_app::sampler::run_sampler;
use sensordash_app::services::provisioning_service::ProvisioningService;

use crate::config::Config;

/// Readings buffered per SSE subscriber before it starts lagging.
const READING_BUS_CAPACITY: usize = 64;

/// Time granted to open streams after shutdown is requested.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Devices
    let sensor = Arc::new(VirtualBme280::new(config.sensor.sea_level_hpa));
    let radio = Arc::new(match config.portal.networks.take() {
        Some(networks) => VirtualRadio::new(networks),
        None => VirtualRadio::default(),
    });

    // Sampler
    let (stop_tx, stop_rx) = watch::channel(false);
    let reading_bus = Arc::new(ReadingBus::new(READING_BUS_CAPACITY));
    let sampler = tokio::spawn(run_sampler(
        Arc::clone(&sensor),
        Arc::clone(&reading_bus),
        config.sample_interval(),
        stopped(stop_rx.clone()),
    ));

    // HTTP
    let provisioning = ProvisioningService::new(
        Arc::clone(&radio),
        Arc::clone(&radio),
        config.portal.ap_address.clone(),
    );
    let state = AppState::new(reading_bus, provisioning);
    let app = sensordash_adapter_http_axum::router::build(state, config.server.assets_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(%bind_addr, "sensordashd listening");

    let server = axum::serve(listener, app).with_graceful_shutdown(stopped(stop_rx.clone()));
    let signal = tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutdown requested");
        let _ = stop_tx.send(true);
    });

    tokio::select! {
        result = server.into_future() => result?,
        () = grace_expired(stop_rx) => {
            tracing::warn!("open streams did not close in time, stopping anyway");
        }
    }

    signal.abort();
    sampler.await?;
    tracing::info!(samples = sensor.samples_taken(), "sensordashd stopped");

    Ok(())
}

/// Resolves once the stop flag is raised (or its sender is gone).
async fn stopped(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stop| *stop).await;
}

async fn grace_expired(rx: watch::Receiver<bool>) {
    stopped(rx).await;
    tokio::time::sleep(SHUTDOWN_GRACE).await;
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
