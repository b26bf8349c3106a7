//! Gauge widgets drawn as inline SVG.

use std::f64::consts::PI;

use leptos::prelude::*;
use sensordash_domain::gauge::{GaugeStyle, Metric};
use sensordash_domain::readout::format_value;

use super::SeriesChart;
use crate::view::GaugeFrame;

const LINEAR_WIDTH: f64 = 200.0;
const ARC_RADIUS: f64 = 80.0;
const ARC_CENTER: (f64, f64) = (100.0, 100.0);

/// End point of a half-circle arc filled up to `fraction`.
fn arc_point(fraction: f64) -> (f64, f64) {
    let theta = PI * (1.0 - fraction);
    (
        ARC_CENTER.0 + ARC_RADIUS * theta.cos(),
        ARC_CENTER.1 - ARC_RADIUS * theta.sin(),
    )
}

/// SVG path of a half-circle arc from the left end up to `fraction`.
fn arc_path(fraction: f64) -> String {
    let (x, y) = arc_point(fraction);
    format!(
        "M {:.2} {:.2} A {ARC_RADIUS} {ARC_RADIUS} 0 0 1 {x:.2} {y:.2}",
        ARC_CENTER.0 - ARC_RADIUS,
        ARC_CENTER.1,
    )
}

#[component]
fn LinearDial(fraction: Signal<f64>) -> impl IntoView {
    view! {
        <svg class="gauge-dial linear" viewBox="0 0 200 40">
            <rect class="gauge-track" x="0" y="10" width=LINEAR_WIDTH height="20"></rect>
            <rect
                class="gauge-fill"
                x="0"
                y="10"
                width=move || format!("{:.2}", LINEAR_WIDTH * fraction.get())
                height="20"
            ></rect>
        </svg>
    }
}

#[component]
fn CircularDial(fraction: Signal<f64>) -> impl IntoView {
    view! {
        <svg class="gauge-dial circular" viewBox="0 0 200 110">
            <path class="gauge-track" d=arc_path(1.0)></path>
            <path class="gauge-fill" d=move || arc_path(fraction.get())></path>
        </svg>
    }
}

/// The container for one metric.
///
/// Stays empty until the gauges are built on the first stream open, then
/// shows the current value on its dial and the recent history below.
#[component]
pub fn Gauge(metric: Metric, frame: RwSignal<Option<GaugeFrame>>) -> impl IntoView {
    let spec = metric.spec();
    let built = move || frame.with(Option::is_some);
    let value = Signal::derive(move || {
        frame.with(|f| f.as_ref().map_or(0.0, |f| f.board.gauge(metric).value()))
    });
    let fraction = Signal::derive(move || spec.fraction(value.get()));
    let label = move || frame.with(|f| f.as_ref().map(|f| metric.label(f.unit)).unwrap_or_default());
    let unit_now = move || frame.with_untracked(|f| f.as_ref().map(|f| f.unit).unwrap_or_default());
    let history = Signal::derive(move || {
        frame.with(|f| {
            f.as_ref()
                .map(|f| f.board.gauge(metric).history().to_vec())
                .unwrap_or_default()
        })
    });

    view! {
        <div id=metric.container_id() class="gauge">
            <Show when=built>
                <h3>{label}</h3>
                {match spec.style {
                    GaugeStyle::Linear => view! { <LinearDial fraction=fraction/> }.into_any(),
                    GaugeStyle::Circular => view! { <CircularDial fraction=fraction/> }.into_any(),
                }}
                <div class="gauge-scale">
                    <span>{format_value(spec.min)}</span>
                    <span class="gauge-value">{move || format_value(value.get())}</span>
                    <span>{format_value(spec.max)}</span>
                </div>
                <SeriesChart name=metric.label(unit_now()) data=history/>
            </Show>
        </div>
    }
}
