//! Server-Sent Events stream of live readings.

use std::convert::Infallible;
use std::time::Instant;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use sensordash_app::ports::{NetworkScanner, WifiProvisioner};
use sensordash_domain::reading::Reading;

use crate::state::AppState;

/// SSE event name the dashboard listens for.
pub const READINGS_EVENT: &str = "readings";

/// `GET /events` — SSE stream of sensor readings.
///
/// Subscribes to the reading bus and sends each reading as a `readings`
/// event whose id is the number of milliseconds since the server started.
/// The stream continues until the client disconnects or the bus closes.
pub async fn stream<S, W>(
    State(state): State<AppState<S, W>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>>
where
    S: NetworkScanner + Send + Sync + 'static,
    W: WifiProvisioner + Send + Sync + 'static,
{
    let started_at = state.started_at;
    let rx = state.reading_bus.subscribe();
    tracing::debug!(
        subscribers = state.reading_bus.subscriber_count(),
        "SSE client connected"
    );

    let events = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(reading) => readings_event(&reading, started_at).map(Ok),
        Err(BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, readings were dropped");
            None
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn readings_event(reading: &Reading, started_at: Instant) -> Option<Event> {
    let id = started_at.elapsed().as_millis().to_string();
    match Event::default().event(READINGS_EVENT).id(id).json_data(reading) {
        Ok(event) => Some(event),
        Err(err) => {
            tracing::warn!(%err, "failed to serialize reading for SSE stream");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tokio_stream::StreamExt;
    use tower::ServiceExt;

    use sensordash_domain::reading::Reading;

    use crate::testing::test_state;

    #[tokio::test]
    async fn should_subscribe_to_reading_bus_when_stream_created() {
        let (state, _) = test_state();
        let bus = std::sync::Arc::clone(&state.reading_bus);
        assert_eq!(bus.subscriber_count(), 0);

        let _sse = super::stream(axum::extract::State(state)).await;

        assert_eq!(bus.subscriber_count(), 1);
    }

    #[tokio::test]
    async fn should_push_readings_event_with_json_payload() {
        let (state, _) = test_state();
        let bus = std::sync::Arc::clone(&state.reading_bus);
        let app = crate::api::routes().with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");

        bus.publish(Reading::from_measurement(20.0, 40.0, 1013.25, 1013.25));

        let mut body = response.into_body().into_data_stream();
        let frame = body.next().await.unwrap().unwrap();
        let text = std::str::from_utf8(&frame).unwrap();
        assert!(text.contains("event: readings\n"));
        assert!(text.contains("id: "));
        assert!(text.contains(r#""temperatureC":20.0"#));
        assert!(text.contains(r#""temperatureF":68.0"#));
    }
}
