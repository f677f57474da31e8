//! Grouped vertical bar chart drawn as inline SVG.

use crate::shared::format::format_amount;
use leptos::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 200.0;
const LABEL_SPACE: f64 = 24.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub series: usize,
    pub value: f64,
}

/// Positions bars for `series[s][i]` (series `s`, group `i`) in a
/// `width` x `height` box. Negative values are drawn as zero.
pub fn layout_bars(series: &[Vec<f64>], width: f64, height: f64) -> Vec<BarRect> {
    let groups = series.iter().map(Vec::len).max().unwrap_or(0);
    if groups == 0 {
        return Vec::new();
    }
    let max = series
        .iter()
        .flatten()
        .fold(0.0_f64, |acc, v| acc.max(*v));
    let group_width = width / groups as f64;
    let bar_width = group_width * 0.8 / series.len() as f64;

    let mut bars = Vec::new();
    for (s, values) in series.iter().enumerate() {
        for (i, value) in values.iter().enumerate() {
            let h = if max > 0.0 { value.max(0.0) / max * height } else { 0.0 };
            bars.push(BarRect {
                x: i as f64 * group_width + group_width * 0.1 + s as f64 * bar_width,
                y: height - h,
                width: bar_width,
                height: h,
                series: s,
                value: *value,
            });
        }
    }
    bars
}

#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    /// One label per group
    #[prop(into)]
    labels: Signal<Vec<String>>,
    /// One value list per series, aligned with `labels`
    #[prop(into)]
    series: Signal<Vec<Vec<f64>>>,
    /// Series names shown under the chart
    #[prop(optional)]
    legend: Vec<&'static str>,
) -> impl IntoView {
    let bars = move || {
        layout_bars(&series.get(), WIDTH, HEIGHT)
            .into_iter()
            .map(|bar| {
                let class = if bar.series == 0 { "" } else { "bar-chart__bar--alt" };
                view! {
                    <rect
                        class=class
                        x=bar.x.to_string()
                        y=bar.y.to_string()
                        width=bar.width.to_string()
                        height=bar.height.to_string()
                    >
                        <title>{format_amount(bar.value)}</title>
                    </rect>
                }
            })
            .collect_view()
    };

    let axis_labels = move || {
        let labels = labels.get();
        let step = WIDTH / labels.len().max(1) as f64;
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <text
                        x=(i as f64 * step + step / 2.0).to_string()
                        y=(HEIGHT + 16.0).to_string()
                        text-anchor="middle"
                    >
                        {label}
                    </text>
                }
            })
            .collect_view()
    };

    let legend_view = (!legend.is_empty()).then(|| {
        let text = legend.join(" / ");
        view! { <div class="muted">{text}</div> }
    });

    view! {
        <div class="chart-card">
            <div class="chart-title">{title}</div>
            <Show
                when=move || series.with(|s| s.iter().any(|v| !v.is_empty()))
                fallback=|| view! { <div class="muted">"No data"</div> }
            >
                <svg
                    class="bar-chart"
                    viewBox=format!("0 0 {} {}", WIDTH, HEIGHT + LABEL_SPACE)
                    width="100%"
                >
                    {bars}
                    {axis_labels}
                </svg>
            </Show>
            {legend_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_scales_to_max() {
        let bars = layout_bars(&[vec![50.0, 100.0]], 200.0, 100.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 100.0);
        assert_eq!(bars[1].y, 0.0);
        assert_eq!(bars[0].height, 50.0);
        assert!(bars[1].x > bars[0].x);
    }

    #[test]
    fn test_layout_groups_series_side_by_side() {
        let bars = layout_bars(&[vec![1.0], vec![2.0]], 100.0, 10.0);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].series, 0);
        assert_eq!(bars[1].series, 1);
        assert!((bars[1].x - (bars[0].x + bars[0].width)).abs() < 1e-9);
    }

    #[test]
    fn test_layout_empty_and_negative() {
        assert!(layout_bars(&[], 100.0, 10.0).is_empty());
        let bars = layout_bars(&[vec![-5.0, 0.0]], 100.0, 10.0);
        assert!(bars.iter().all(|b| b.height == 0.0));
    }
}
