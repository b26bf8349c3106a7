use leptos::prelude::*;
use sensordash_app::telemetry_controller::DashboardVariant;

use crate::components::{ReadoutCards, StatusBadge, UnitSelect};
use crate::telemetry::use_telemetry;

/// Plain numeric dashboard.
#[component]
pub fn Readout() -> impl IntoView {
    let telemetry = use_telemetry(DashboardVariant::Readout);
    let view = telemetry.view;

    view! {
        <div class="dashboard readout-page">
            <h1>"Sensor readout"</h1>
            <StatusBadge status=view.status/>
            <UnitSelect unit=view.unit on_change=move |unit| telemetry.set_unit(unit)/>
            <ReadoutCards view=view/>
            <Show when=move || !telemetry.is_live()>
                <p class="notice">"Live updates are not supported by this browser."</p>
            </Show>
        </div>
    }
}
