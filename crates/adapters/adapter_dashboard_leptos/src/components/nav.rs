use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav>
            <ul>
                <li><A href="/">"Gauges"</A></li>
                <li><A href="/readout">"Readout"</A></li>
                <li><A href="/portal">"WiFi"</A></li>
            </ul>
        </nav>
    }
}
