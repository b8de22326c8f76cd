//! SVG charts drawn from `wf_core::charts` geometry.

use leptos::prelude::*;
use wf_core::charts::{bars, donut, line_points, nice_ceiling, polyline, Frame, Point, Slice};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 32.0;

fn frame() -> Frame {
    Frame::new(WIDTH, HEIGHT, PADDING)
}

/// Horizontal grid lines with their axis values.
fn grid(max: f64) -> impl IntoView {
    let f = frame();
    (0..=4)
        .map(|i| {
            let value = max * i as f64 / 4.0;
            let y = f.height - f.padding - (f.height - 2.0 * f.padding) * i as f64 / 4.0;
            view! {
                <g class="chart-grid">
                    <line x1=f.padding y1=y x2=f.width - f.padding y2=y />
                    <text x=f.padding - 6.0 y=y + 4.0 text-anchor="end">{format_axis(value)}</text>
                </g>
            }
        })
        .collect_view()
}

fn format_axis(v: f64) -> String {
    if v >= 1000.0 {
        format!("{}K", (v / 1000.0).round())
    } else {
        format!("{}", v.round())
    }
}

fn x_labels(points: Vec<Point>, labels: Vec<String>) -> impl IntoView {
    points
        .into_iter()
        .zip(labels)
        .map(|(p, label)| {
            view! {
                <text class="chart-x-label" x=p.x y=HEIGHT - 10.0 text-anchor="middle">{label}</text>
            }
        })
        .collect_view()
}

#[component]
pub fn LineChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    values: Vec<f64>,
    #[prop(default = "#2563EB")] color: &'static str,
    #[prop(into)] aria_label: Signal<String>,
) -> impl IntoView {
    let points = line_points(&values, frame());
    let max = nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let line = polyline(&points);
    let dots = points.clone();
    view! {
        <svg class="chart chart-line" viewBox=format!("0 0 {WIDTH} {HEIGHT}") role="img" aria-label=move || aria_label.get()>
            {grid(max)}
            <polyline points=line fill="none" stroke=color stroke-width="2" />
            {dots
                .iter()
                .map(|p| view! { <circle cx=p.x cy=p.y r="4" fill=color /> })
                .collect_view()}
            {move || x_labels(points.clone(), labels.get())}
        </svg>
    }
}

#[component]
pub fn BarChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    values: Vec<f64>,
    #[prop(default = "#2563EB")] color: &'static str,
    #[prop(into)] aria_label: Signal<String>,
) -> impl IntoView {
    let rects = bars(&values, frame(), 0.3);
    let max = nice_ceiling(values.iter().copied().fold(0.0, f64::max));
    let centers: Vec<Point> = rects
        .iter()
        .map(|b| Point { x: b.x + b.width / 2.0, y: b.y })
        .collect();
    view! {
        <svg class="chart chart-bar" viewBox=format!("0 0 {WIDTH} {HEIGHT}") role="img" aria-label=move || aria_label.get()>
            {grid(max)}
            {rects
                .iter()
                .map(|b| view! {
                    <rect x=b.x y=b.y width=b.width height=b.height rx="3" fill=color />
                })
                .collect_view()}
            {move || x_labels(centers.clone(), labels.get())}
        </svg>
    }
}

/// Donut with percentage labels on each segment and a legend below.
#[component]
pub fn DonutChart(slices: &'static [Slice], #[prop(into)] aria_label: Signal<String>) -> impl IntoView {
    let size = 220.0;
    let center = Point { x: size / 2.0, y: size / 2.0 };
    let arcs = donut(slices, center, 60.0, 100.0);
    view! {
        <div class="donut">
            <svg class="chart chart-donut" viewBox=format!("0 0 {size} {size}") role="img" aria-label=move || aria_label.get()>
                {arcs
                    .into_iter()
                    .map(|arc| view! {
                        <g>
                            <path d=arc.path fill=arc.color>
                                <title>{format!("{}: {}%", arc.label, arc.percent)}</title>
                            </path>
                            <text class="donut-label" x=arc.anchor.x y=arc.anchor.y text-anchor="middle" dominant-baseline="middle">
                                {format!("{}%", arc.percent)}
                            </text>
                        </g>
                    })
                    .collect_view()}
            </svg>
            <ul class="chart-legend">
                {slices
                    .iter()
                    .map(|s| view! {
                        <li>
                            <span class="legend-swatch" style=format!("background: {}", s.color)></span>
                            {s.label}
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
