//! Periodic sampling loop — reads the sensor and publishes to the bus.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::ports::SensorSource;
use crate::reading_bus::ReadingBus;

/// Sample `source` every `interval` and publish each reading on `bus`
/// until `shutdown` resolves.
///
/// Failed samples are logged and skipped; the loop keeps going.
pub async fn run_sampler<S, F>(source: S, bus: Arc<ReadingBus>, interval: Duration, shutdown: F)
where
    S: SensorSource,
    F: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    tracing::info!(interval_ms = interval.as_millis(), "sampler started");

    loop {
        tokio::select! {
            () = &mut shutdown => break,
            _ = ticker.tick() => match source.sample() {
                Ok(reading) => {
                    let receivers = bus.publish(reading);
                    tracing::trace!(receivers, "reading published");
                }
                Err(err) => tracing::warn!(%err, "sensor sample failed"),
            },
        }
    }

    tracing::info!("sampler stopped");
}
