//! # sensordash-adapter-dashboard-leptos
//!
//! Browser front end compiled to WebAssembly: the live gauges, the plain
//! readout and the WiFi captive portal. Drives the `sensordash-app`
//! controllers through browser-backed ports (`EventSource`, `localStorage`,
//! `fetch`).

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
mod components;
mod pages;
pub mod sse;
pub mod storage;
mod telemetry;
pub mod view;

use components::Nav;
use pages::{Gauges, NotFound, Portal, Readout};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=Gauges/>
                    <Route path=path!("readout") view=Readout/>
                    <Route path=path!("portal") view=Portal/>
                </Routes>
            </main>
        </Router>
    }
}
