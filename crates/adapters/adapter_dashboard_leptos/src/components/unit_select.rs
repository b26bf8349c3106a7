//! Temperature unit selector.

use leptos::prelude::*;
use sensordash_domain::unit::TemperatureUnit;

const UNITS: [TemperatureUnit; 2] = [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

/// The `unit-select` control.
///
/// Reflects `unit` and reports each user change through `on_change`.
#[component]
pub fn UnitSelect<F>(unit: RwSignal<TemperatureUnit>, on_change: F) -> impl IntoView
where
    F: Fn(TemperatureUnit) + 'static,
{
    let handle_change = move |ev: leptos::ev::Event| {
        match TemperatureUnit::from_code(&event_target_value(&ev)) {
            Some(selected) => on_change(selected),
            None => leptos::logging::warn!("unknown unit selected"),
        }
    };

    view! {
        <label class="unit-select">
            "Unit "
            <select id="unit-select" prop:value=move || unit.get().code() on:change=handle_change>
                {UNITS
                    .into_iter()
                    .map(|u| view! { <option value=u.code()>{u.symbol()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
