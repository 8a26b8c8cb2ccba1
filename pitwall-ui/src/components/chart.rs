//! Chart Component
//!
//! Line, bar, radar and doughnut charts drawn on an HTML5 Canvas from
//! composed [`ChartData`].

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use pitwall::views::ChartData;

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const AXIS_TEXT: &str = "#9ca3af"; // gray-400

/// How a chart renders its series
#[derive(Clone, Copy, PartialEq)]
pub enum ChartKind {
    /// One line per series across the labels
    Line,
    /// Grouped bars, one group per label
    Bar,
    /// One polygon per series, one axis per label
    Radar,
    /// One slice per series, sized by its first value
    Doughnut,
}

/// Canvas chart component
#[component]
pub fn Chart(
    kind: ChartKind,
    #[prop(into)]
    data: Signal<ChartData>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw chart when data changes
    create_effect(move |_| {
        let data = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, kind, &data);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />

            <ChartLegend data=data />
        </div>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend(data: Signal<ChartData>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {move || {
                data.get()
                    .series
                    .into_iter()
                    .map(|series| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", series.color)
                            />
                            <span class="text-sm text-gray-300">{series.label}</span>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Drawing area inside the canvas margins
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

/// Smallest and largest finite value across all series
fn finite_range(data: &ChartData) -> Option<(f64, f64)> {
    data.series
        .iter()
        .flat_map(|s| s.data.iter().copied())
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, kind: ChartKind, data: &ChartData) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_global_alpha(1.0);
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some((lo, hi)) = finite_range(data) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    };

    let plot = Plot {
        left: 60.0,
        top: 20.0,
        width: width - 80.0,
        height: height - 60.0,
    };

    match kind {
        ChartKind::Line => draw_line(&ctx, &plot, data, lo, hi),
        ChartKind::Bar => draw_bars(&ctx, &plot, data, hi),
        ChartKind::Radar => draw_radar(&ctx, width, height, data, hi),
        ChartKind::Doughnut => draw_doughnut(&ctx, width, height, data),
    }
}

/// Horizontal grid with value labels; returns the value → y mapping
fn draw_grid(ctx: &CanvasRenderingContext2d, plot: &Plot, min: f64, max: f64) -> impl Fn(f64) -> f64 {
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = plot.top + (i as f64 / 5.0) * plot.height;
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.left + plot.width, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    let (top, height) = (plot.top, plot.height);
    move |value| top + ((max - value) / (max - min)) * height
}

fn draw_x_labels(ctx: &CanvasRenderingContext2d, plot: &Plot, labels: &[String], x: impl Fn(usize) -> f64) {
    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");

    // Thin out labels so long races stay readable
    let step = (labels.len() / 10).max(1);
    for (i, label) in labels.iter().enumerate().step_by(step) {
        let _ = ctx.fill_text(label, x(i) - 15.0, plot.top + plot.height + 25.0);
    }
}

fn draw_line(ctx: &CanvasRenderingContext2d, plot: &Plot, data: &ChartData, lo: f64, hi: f64) {
    // Add padding to y range
    let range = hi - lo;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    let y = draw_grid(ctx, plot, lo - padding, hi + padding);

    let points = data
        .series
        .iter()
        .map(|s| s.data.len())
        .max()
        .unwrap_or(0)
        .max(data.labels.len());
    let x = |i: usize| {
        if points <= 1 {
            plot.left + plot.width / 2.0
        } else {
            plot.left + (i as f64 / (points - 1) as f64) * plot.width
        }
    };

    for series in &data.series {
        ctx.set_stroke_style(&series.color.as_str().into());
        ctx.set_fill_style(&series.color.as_str().into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        // A non-finite value breaks the line
        let mut pen_down = false;
        for (i, value) in series.data.iter().enumerate() {
            if !value.is_finite() {
                pen_down = false;
                continue;
            }
            if pen_down {
                ctx.line_to(x(i), y(*value));
            } else {
                ctx.move_to(x(i), y(*value));
                pen_down = true;
            }
        }
        ctx.stroke();

        for (i, value) in series.data.iter().enumerate().filter(|(_, v)| v.is_finite()) {
            ctx.begin_path();
            let _ = ctx.arc(x(i), y(*value), 3.0, 0.0, PI * 2.0);
            ctx.fill();
        }
    }

    draw_x_labels(ctx, plot, &data.labels, x);
}

fn draw_bars(ctx: &CanvasRenderingContext2d, plot: &Plot, data: &ChartData, hi: f64) {
    let max = if hi > 0.0 { hi * 1.1 } else { 1.0 };
    let y = draw_grid(ctx, plot, 0.0, max);

    let groups = data
        .series
        .iter()
        .map(|s| s.data.len())
        .max()
        .unwrap_or(0)
        .max(data.labels.len())
        .max(1);
    let group_width = plot.width / groups as f64;

    // One single-value series per label (e.g. one colored bar per team)
    // puts series `s` in group `s` instead of side by side in group 0
    let per_label = data.series.len() == data.labels.len()
        && data.series.iter().all(|s| s.data.len() == 1);
    let bar_width = if per_label {
        group_width * 0.8
    } else {
        group_width * 0.8 / data.series.len().max(1) as f64
    };

    for (s, series) in data.series.iter().enumerate() {
        ctx.set_fill_style(&series.color.as_str().into());
        for (i, value) in series.data.iter().enumerate() {
            if !value.is_finite() || *value <= 0.0 {
                continue;
            }
            let (group, slot) = if per_label { (s, 0) } else { (i, s) };
            let left = plot.left
                + group as f64 * group_width
                + group_width * 0.1
                + slot as f64 * bar_width;
            let top = y(*value);
            ctx.fill_rect(left, top, bar_width, plot.top + plot.height - top);
        }
    }

    draw_x_labels(ctx, plot, &data.labels, |i| {
        plot.left + (i as f64 + 0.5) * group_width
    });
}

fn draw_radar(ctx: &CanvasRenderingContext2d, width: f64, height: f64, data: &ChartData, hi: f64) {
    let axes = data.labels.len();
    if axes < 3 {
        return;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 40.0;
    let max = if hi > 0.0 { hi } else { 1.0 };
    let angle = |i: usize| -PI / 2.0 + (i as f64 / axes as f64) * PI * 2.0;

    // Web and axis labels
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    for ring in 1..=4 {
        let r = radius * ring as f64 / 4.0;
        ctx.begin_path();
        for i in 0..=axes {
            let (px, py) = (cx + r * angle(i).cos(), cy + r * angle(i).sin());
            if i == 0 {
                ctx.move_to(px, py);
            } else {
                ctx.line_to(px, py);
            }
        }
        ctx.stroke();
    }

    ctx.set_fill_style(&AXIS_TEXT.into());
    ctx.set_font("12px sans-serif");
    for (i, label) in data.labels.iter().enumerate() {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(cx + radius * angle(i).cos(), cy + radius * angle(i).sin());
        ctx.stroke();

        let (lx, ly) = (
            cx + (radius + 20.0) * angle(i).cos(),
            cy + (radius + 20.0) * angle(i).sin(),
        );
        let _ = ctx.fill_text(label, lx - 25.0, ly + 4.0);
    }

    for series in &data.series {
        ctx.begin_path();
        for i in 0..axes {
            // Non-finite ratios sit on the rim or at the center
            let value = series.data.get(i).copied().unwrap_or(0.0);
            let scaled = if value.is_finite() {
                (value / max).clamp(0.0, 1.0)
            } else if value > 0.0 {
                1.0
            } else {
                0.0
            };
            let (px, py) = (
                cx + radius * scaled * angle(i).cos(),
                cy + radius * scaled * angle(i).sin(),
            );
            if i == 0 {
                ctx.move_to(px, py);
            } else {
                ctx.line_to(px, py);
            }
        }
        ctx.close_path();

        ctx.set_global_alpha(0.25);
        ctx.set_fill_style(&series.color.as_str().into());
        ctx.fill();
        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style(&series.color.as_str().into());
        ctx.set_line_width(2.0);
        ctx.stroke();
    }
}

fn draw_doughnut(ctx: &CanvasRenderingContext2d, width: f64, height: f64, data: &ChartData) {
    let slices: Vec<_> = data
        .series
        .iter()
        .filter_map(|s| s.data.first().map(|v| (s, *v)))
        .filter(|(_, v)| v.is_finite() && *v > 0.0)
        .collect();
    let total: f64 = slices.iter().map(|(_, v)| v).sum();

    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = width.min(height) / 2.0 - 20.0;

    if total <= 0.0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No wins yet", cx - 40.0, cy);
        return;
    }

    let mut start = -PI / 2.0;
    for (series, value) in slices {
        let end = start + value / total * PI * 2.0;
        ctx.set_fill_style(&series.color.as_str().into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();
        start = end;
    }

    // Hole
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.55, 0.0, PI * 2.0);
    ctx.fill();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall::views::Series;

    fn series(data: Vec<f64>) -> Series {
        Series {
            label: "s".to_string(),
            data,
            color: "#fff".to_string(),
        }
    }

    #[test]
    fn test_finite_range_skips_nan_and_infinity() {
        let data = ChartData {
            labels: vec![],
            series: vec![series(vec![f64::NAN, 3.0, f64::INFINITY]), series(vec![-1.0])],
        };
        assert_eq!(finite_range(&data), Some((-1.0, 3.0)));
    }

    #[test]
    fn test_finite_range_empty() {
        assert_eq!(finite_range(&ChartData::default()), None);
        let data = ChartData {
            labels: vec![],
            series: vec![series(vec![f64::NAN])],
        };
        assert_eq!(finite_range(&data), None);
    }
}
