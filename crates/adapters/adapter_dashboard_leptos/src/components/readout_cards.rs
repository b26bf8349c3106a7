//! Numeric readout of the latest reading.

use leptos::prelude::*;
use sensordash_domain::readout::Readout;
use sensordash_domain::unit::TemperatureUnit;

use crate::view::SignalView;

/// Placeholder shown until the first reading arrives.
const NO_VALUE: &str = "--";

fn field(view: SignalView, pick: fn(&Readout) -> &str) -> impl Fn() -> String + Copy {
    move || {
        view.readout
            .with(|r| r.as_ref().map_or(NO_VALUE, pick).to_string())
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// One card per metric. Temperature has a Celsius and a Fahrenheit group;
/// exactly one of them is visible, matching the selected unit.
#[component]
pub fn ReadoutCards(view: SignalView) -> impl IntoView {
    let celsius = move || display(view.unit.get().visibility().celsius);
    let fahrenheit = move || display(view.unit.get().visibility().fahrenheit);

    view! {
        <div class="readout">
            <div class="card">
                <span class="card-label">"Temperature"</span>
                <span class="unit-c" style:display=celsius>
                    <span id="temperature-c" class="card-value">{field(view, |r| r.temperature_c.as_str())}</span>
                    {TemperatureUnit::Celsius.symbol()}
                </span>
                <span class="unit-f" style:display=fahrenheit>
                    <span id="temperature-f" class="card-value">{field(view, |r| r.temperature_f.as_str())}</span>
                    {TemperatureUnit::Fahrenheit.symbol()}
                </span>
            </div>
            <div class="card">
                <span class="card-label">"Humidity"</span>
                <span id="humidity" class="card-value">{field(view, |r| r.humidity.as_str())}</span>
                "%"
            </div>
            <div class="card">
                <span class="card-label">"Pressure"</span>
                <span id="pressure" class="card-value">{field(view, |r| r.pressure.as_str())}</span>
                "hPa"
            </div>
            <div class="card">
                <span class="card-label">"Altitude"</span>
                <span id="altitude" class="card-value">{field(view, |r| r.altitude.as_str())}</span>
                "m"
            </div>
        </div>
    }
}
