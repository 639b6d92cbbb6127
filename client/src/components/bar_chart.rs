//! Horizontal bar chart for labelled values.
//!
//! Missing values draw no bar and show a dash instead of zero.

#[cfg(test)]
#[path = "bar_chart_test.rs"]
mod bar_chart_test;

use forest::ChartDatum;
use forest::format::with_unit;
use leptos::prelude::*;

/// Bar widths as a percentage of the largest value.
fn bar_widths(data: &[ChartDatum]) -> Vec<f64> {
    let max = data.iter().filter_map(|d| d.value).fold(0.0_f64, f64::max);
    data.iter()
        .map(|d| match d.value {
            Some(v) if max > 0.0 => (v.max(0.0) / max * 100.0).min(100.0),
            _ => 0.0,
        })
        .collect()
}

#[component]
pub fn BarChart(#[prop(into)] title: String, data: Vec<ChartDatum>, #[prop(into)] unit: String) -> impl IntoView {
    let widths = bar_widths(&data);
    let rows = data
        .into_iter()
        .zip(widths)
        .map(|(datum, width)| {
            let value = with_unit(datum.value, 0, &unit);
            view! {
                <div class="bar-chart__row">
                    <span class="bar-chart__label">{datum.label}</span>
                    <div class="bar-chart__track">
                        <div class="bar-chart__bar" style=format!("width: {width:.1}%")></div>
                    </div>
                    <span class="bar-chart__value">{value}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <figure class="bar-chart">
            <figcaption class="bar-chart__title">{title}</figcaption>
            {rows}
        </figure>
    }
}
