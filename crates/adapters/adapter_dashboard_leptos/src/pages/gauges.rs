use leptos::prelude::*;
use sensordash_app::telemetry_controller::DashboardVariant;
use sensordash_domain::gauge::{DEFAULT_WINDOW_SIZE, METRICS};

use crate::components::{Gauge, ReadoutCards, StatusBadge, UnitSelect};
use crate::telemetry::use_telemetry;

/// Live dashboard with one gauge and history chart per metric.
#[component]
pub fn Gauges() -> impl IntoView {
    let telemetry = use_telemetry(DashboardVariant::Gauges {
        window_size: DEFAULT_WINDOW_SIZE,
    });
    let view = telemetry.view;

    view! {
        <div class="dashboard gauges">
            <h1>"Sensor gauges"</h1>
            <StatusBadge status=view.status/>
            <UnitSelect unit=view.unit on_change=move |unit| telemetry.set_unit(unit)/>
            <div class="gauge-grid">
                {METRICS
                    .into_iter()
                    .map(|metric| view! { <Gauge metric=metric frame=view.gauges/> })
                    .collect_view()}
            </div>
            <ReadoutCards view=view/>
        </div>
    }
}
