//! Loading spinner component.

use leptos::prelude::*;

/// A spinner shown while a request is in flight.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">
            <span class="spinner"></span>
        </p>
    }
}
