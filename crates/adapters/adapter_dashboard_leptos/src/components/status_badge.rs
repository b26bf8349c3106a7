//! Connection status indicator.

use leptos::prelude::*;
use sensordash_domain::status::StatusIndicator;

/// The `sensor-status` element; text and `online` class come from the same
/// indicator so they never disagree.
#[component]
pub fn StatusBadge(status: RwSignal<StatusIndicator>) -> impl IntoView {
    view! {
        <p id="sensor-status" class=move || status.with(StatusIndicator::class)>
            {move || status.with(|s| s.text.clone())}
        </p>
    }
}
