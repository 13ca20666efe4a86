//! Hand-rolled SVG charts for the analytics panels: stacked bars for stock
//! by variety, percentage bars for size distribution, and a polyline for
//! order-frequency trends.

use dioxus::prelude::*;

use crate::analytics::{SizeShare, TrendPoint};
use crate::core::format;

const SERIES_COLORS: [&str; 10] = [
    "#3b82f6", "#8b5cf6", "#ec4899", "#06b6d4", "#10b981", "#f59e0b", "#6366f1", "#ef4444",
    "#84cc16", "#14b8a6",
];

pub fn series_color(index: usize) -> &'static str {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub segments: Vec<(String, u32)>,
}

/// Series labels in first-appearance order, so colors stay stable across
/// groups that miss some sizes.
fn series_names(groups: &[BarGroup]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for group in groups {
        for (name, _) in &group.segments {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
    }
    names
}

fn max_total(groups: &[BarGroup]) -> u32 {
    groups
        .iter()
        .map(|group| group.segments.iter().map(|(_, v)| *v).sum::<u32>())
        .max()
        .unwrap_or(0)
}

/// Scale values into `"x,y x,y …"` polyline coordinates.
fn polyline_points(values: &[f64], width: f64, height: f64, pad: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(f64::EPSILON);
    let inner_w = width - 2.0 * pad;
    let inner_h = height - 2.0 * pad;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if values.len() == 1 {
                width / 2.0
            } else {
                pad + i as f64 * inner_w / (values.len() - 1) as f64
            };
            let y = if max == min {
                height / 2.0
            } else {
                height - pad - (value - min) / span * inner_h
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn StackedBarChart(groups: Vec<BarGroup>) -> Element {
    const WIDTH: f64 = 640.0;
    const HEIGHT: f64 = 280.0;
    const PAD_TOP: f64 = 10.0;
    const PAD_BOTTOM: f64 = 30.0;

    if groups.is_empty() {
        return rsx! {
            p { class: "empty-state", "No data to chart" }
        };
    }

    let series = series_names(&groups);
    let max = max_total(&groups).max(1) as f64;
    let plot_height = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let slot = WIDTH / groups.len() as f64;
    let bar_width = (slot * 0.55).min(64.0);

    struct Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    }
    struct AxisLabel {
        x: f64,
        text: String,
    }

    let mut bars: Vec<Bar> = Vec::new();
    let mut labels: Vec<AxisLabel> = Vec::new();
    let axis_y = HEIGHT - PAD_BOTTOM;
    let label_y = HEIGHT - 10.0;

    for (gi, group) in groups.iter().enumerate() {
        let center = slot * gi as f64 + slot / 2.0;
        let mut baseline = HEIGHT - PAD_BOTTOM;
        for (name, value) in &group.segments {
            if *value == 0 {
                continue;
            }
            let height = *value as f64 / max * plot_height;
            baseline -= height;
            let color_index = series.iter().position(|s| s == name).unwrap_or(0);
            bars.push(Bar {
                x: center - bar_width / 2.0,
                y: baseline,
                width: bar_width,
                height,
                color: series_color(color_index),
            });
        }
        labels.push(AxisLabel {
            x: center,
            text: group.label.clone(),
        });
    }

    rsx! {
        div { class: "chart",
            svg {
                class: "chart__svg",
                view_box: "0 0 640 280",
                preserve_aspect_ratio: "xMidYMid meet",
                line {
                    x1: "0",
                    y1: "{axis_y}",
                    x2: "{WIDTH}",
                    y2: "{axis_y}",
                    stroke: "#e5e7eb",
                    stroke_width: "1",
                }
                for bar in bars.into_iter() {
                    rect {
                        x: "{bar.x:.1}",
                        y: "{bar.y:.1}",
                        width: "{bar.width:.1}",
                        height: "{bar.height:.1}",
                        rx: "2",
                        fill: bar.color,
                    }
                }
                for label in labels.into_iter() {
                    text {
                        x: "{label.x:.1}",
                        y: "{label_y}",
                        text_anchor: "middle",
                        class: "chart__axis-label",
                        "{label.text}"
                    }
                }
            }
            div { class: "chart__legend",
                for (index, name) in series.into_iter().enumerate() {
                    span { class: "chart__legend-item",
                        span {
                            class: "chart__legend-dot",
                            style: "background-color: {series_color(index)}",
                        }
                        "{name}"
                    }
                }
            }
        }
    }
}

/// Percentage bars for the size distribution, largest share first.
#[component]
pub fn DistributionBars(shares: Vec<SizeShare>) -> Element {
    rsx! {
        div { class: "distribution",
            for (index, entry) in shares.into_iter().enumerate() {
                div { class: "distribution__row",
                    div { class: "distribution__meta",
                        span { class: "distribution__label",
                            span {
                                class: "chart__legend-dot",
                                style: "background-color: {series_color(index)}",
                            }
                            "{entry.size}"
                        }
                        span { class: "distribution__figures",
                            "{format::format_count(entry.bags)} bags ({format::format_percent(entry.share)})"
                        }
                    }
                    div { class: "distribution__track",
                        div {
                            class: "distribution__fill",
                            style: "width: {entry.share:.1}%; background-color: {series_color(index)}",
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TrendLine(points: Vec<TrendPoint>) -> Element {
    const WIDTH: f64 = 640.0;
    const HEIGHT: f64 = 200.0;
    const PAD: f64 = 22.0;

    if points.is_empty() {
        return rsx! {
            p { class: "empty-state", "No data to chart" }
        };
    }

    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let path = polyline_points(&values, WIDTH, HEIGHT, PAD);
    let dots: Vec<(String, String)> = path
        .split(' ')
        .filter_map(|pair| pair.split_once(','))
        .map(|(x, y)| (x.to_string(), y.to_string()))
        .collect();
    let first_label = points.first().map(|p| p.label.clone()).unwrap_or_default();
    let last_label = points.last().map(|p| p.label.clone()).unwrap_or_default();

    rsx! {
        div { class: "chart",
            svg {
                class: "chart__svg",
                view_box: "0 0 640 200",
                preserve_aspect_ratio: "xMidYMid meet",
                polyline {
                    points: "{path}",
                    fill: "none",
                    stroke: series_color(0),
                    stroke_width: "2.5",
                }
                for (x, y) in dots.into_iter() {
                    circle { cx: "{x}", cy: "{y}", r: "3", fill: series_color(0) }
                }
            }
            div { class: "chart__axis-row",
                span { class: "chart__axis-label", "{first_label}" }
                span { class: "chart__axis-label", "{last_label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_scales_to_the_plot_box() {
        let path = polyline_points(&[0.0, 10.0], 100.0, 100.0, 0.0);
        assert_eq!(path, "0.0,100.0 100.0,0.0");
    }

    #[test]
    fn flat_series_sits_on_the_midline() {
        let path = polyline_points(&[5.0, 5.0, 5.0], 100.0, 100.0, 0.0);
        assert_eq!(path, "0.0,50.0 50.0,50.0 100.0,50.0");
    }

    #[test]
    fn series_names_keep_first_appearance_order() {
        let groups = vec![
            BarGroup {
                label: "Kufri Jyoti".into(),
                segments: vec![("Seed".into(), 10), ("Goli".into(), 5)],
            },
            BarGroup {
                label: "Kufri Bahar".into(),
                segments: vec![("Ration".into(), 2), ("Seed".into(), 1)],
            },
        ];
        assert_eq!(series_names(&groups), vec!["Seed", "Goli", "Ration"]);
        assert_eq!(max_total(&groups), 15);
    }
}
