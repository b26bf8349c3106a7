//! Bounded history chart using `leptos-chartistry` with SVG rendering.

use leptos::prelude::*;
use leptos_chartistry::*;
use sensordash_domain::window::SeriesPoint;

#[allow(clippy::cast_precision_loss)]
fn sample_x(point: &SeriesPoint) -> f64 {
    point.x as f64
}

/// Line chart of the recent points of one gauge, x being the sample index.
#[component]
pub fn SeriesChart(name: String, data: Signal<Vec<SeriesPoint>>) -> impl IntoView {
    let series = Series::new(sample_x).line(Line::new(|p: &SeriesPoint| p.y).with_name(name));
    let inner = vec![
        AxisMarker::left_edge().into_inner(),
        AxisMarker::bottom_edge().into_inner(),
        YGridLine::default().into_inner(),
        XGuideLine::over_data().into_inner(),
    ];
    view! {
        <div class="series-chart">
            <Chart
                aspect_ratio=AspectRatio::from_env_width_apply_ratio(3.0)
                left=TickLabels::aligned_floats()
                bottom=TickLabels::aligned_floats()
                inner=inner
                tooltip=Tooltip::left_cursor()
                series=series
                data=data
            />
        </div>
    }
}
