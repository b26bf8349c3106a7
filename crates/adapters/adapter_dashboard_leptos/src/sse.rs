//! SSE client for the `/events` reading stream.
//!
//! Forwards the three named stream events to a [`StreamEventHandler`] in
//! arrival order, each call running to completion before the next event is
//! dispatched by the browser.

use std::cell::RefCell;
use std::rc::Rc;

use sensordash_app::stream::{StreamEventHandler, StreamFault};
use sensordash_domain::status::ReadyState;
use wasm_bindgen::prelude::*;
use web_sys::{EventSource, MessageEvent};

/// Path of the server-push stream.
pub const STREAM_PATH: &str = "/events";

/// Guard that closes the `EventSource` connection on drop.
pub struct SseConnection {
    source: EventSource,
    _on_open: Closure<dyn FnMut(web_sys::Event)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
    _on_readings: Closure<dyn FnMut(MessageEvent)>,
}

impl Drop for SseConnection {
    fn drop(&mut self) {
        self.source.close();
    }
}

/// Subscribe `handler` to the reading stream.
///
/// Returns `None` when the browser cannot open an `EventSource`; the page
/// then stays static. Drop the guard to disconnect.
pub fn subscribe<H>(handler: Rc<RefCell<H>>) -> Option<SseConnection>
where
    H: StreamEventHandler + 'static,
{
    match open(handler) {
        Ok(conn) => Some(conn),
        Err(err) => {
            leptos::logging::warn!("live readings unavailable: {err:?}");
            None
        }
    }
}

fn open<H>(handler: Rc<RefCell<H>>) -> Result<SseConnection, JsValue>
where
    H: StreamEventHandler + 'static,
{
    let source = EventSource::new(STREAM_PATH)?;

    let on_open = {
        let handler = Rc::clone(&handler);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
            handler.borrow_mut().on_open();
        })
    };

    let on_error = {
        let handler = Rc::clone(&handler);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            let ready_state = ev
                .target()
                .and_then(|target| target.dyn_into::<EventSource>().ok())
                .map_or(ReadyState::Closed, |es| ReadyState::from_code(es.ready_state()));
            if handler.borrow_mut().on_error(ready_state) == StreamFault::Transient {
                leptos::logging::log!("transient SSE error, browser keeps the stream open");
            }
        })
    };

    let on_readings = Closure::<dyn FnMut(MessageEvent)>::new(move |msg: MessageEvent| {
        let Some(data) = msg.data().as_string() else {
            leptos::logging::warn!("readings event without text payload");
            return;
        };
        if let Err(err) = handler.borrow_mut().on_readings(&data) {
            leptos::logging::error!("dropping reading: {err}");
        }
    });

    source.add_event_listener_with_callback("open", on_open.as_ref().unchecked_ref())?;
    source.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
    source.add_event_listener_with_callback("readings", on_readings.as_ref().unchecked_ref())?;

    Ok(SseConnection {
        source,
        _on_open: on_open,
        _on_error: on_error,
        _on_readings: on_readings,
    })
}
