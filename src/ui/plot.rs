use std::f32::consts::PI;
use std::ops::RangeInclusive;

use eframe::egui::{Align2, FontId, Pos2, Sense, Shape, Stroke, Ui, pos2, vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::{GAUGE_BAR, generate_palette};
use crate::error::DashboardError;
use crate::view::charts::{BarChartSpec, BarMode, ChartSpec, GaugeSpec};

const CHART_HEIGHT: f32 = 280.0;
/// Share of a category slot covered by its bars.
const GROUP_WIDTH: f64 = 0.8;

// ---------------------------------------------------------------------------
// Chart slot (central panel)
// ---------------------------------------------------------------------------

/// Render one chart slot; `slot` keeps plot ids stable across frames.
pub fn chart(ui: &mut Ui, slot: usize, chart: &Result<ChartSpec, DashboardError>) {
    match chart {
        Err(e) => super::error_label(ui, e),
        Ok(spec) => {
            ui.strong(spec.title());
            match spec {
                ChartSpec::Empty { .. } => {
                    Plot::new(("chart", slot))
                        .height(CHART_HEIGHT)
                        .show(ui, |_plot_ui| {});
                }
                ChartSpec::Bars(bars) => bar_chart(ui, slot, bars),
                ChartSpec::Gauge(dial) => gauge(ui, dial),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, slot: usize, spec: &BarChartSpec) {
    let n_series = spec.series.len().max(1) as f64;
    let bar_width = match spec.mode {
        BarMode::Grouped => GROUP_WIDTH / n_series,
        BarMode::Stacked => GROUP_WIDTH,
    };

    let mut charts: Vec<BarChart> = Vec::with_capacity(spec.series.len());
    for (k, (series, color)) in spec
        .series
        .iter()
        .zip(generate_palette(spec.series.len()))
        .enumerate()
    {
        let offset = match spec.mode {
            BarMode::Grouped => (k as f64 - (n_series - 1.0) / 2.0) * bar_width,
            BarMode::Stacked => 0.0,
        };
        let bars: Vec<Bar> = series
            .values
            .iter()
            .zip(&spec.categories)
            .enumerate()
            .map(|(i, (&value, label))| {
                Bar::new(i as f64 + offset, value)
                    .width(bar_width)
                    .name(label)
            })
            .collect();

        let mut chart = BarChart::new(bars).name(series.name).color(color);
        if spec.mode == BarMode::Stacked {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart = chart.stack_on(&below);
        }
        charts.push(chart);
    }

    let labels = spec.categories.clone();
    Plot::new(("chart", slot))
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Axis label for a grid mark: the category at an integer position, else blank.
fn category_label(labels: &[String], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    labels.get(slot as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Gauge
// ---------------------------------------------------------------------------

/// Angle of `value` on a half-circle dial: π at the range start, 0 at its end.
/// Values outside the range pin to the nearest end.
fn dial_angle(value: f64, range: &RangeInclusive<f64>) -> f32 {
    let (min, max) = (*range.start(), *range.end());
    let t = if value.is_nan() {
        0.0
    } else {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    };
    PI * (1.0 - t as f32)
}

fn gauge(ui: &mut Ui, spec: &GaugeSpec) {
    let size = vec2(ui.available_width().min(420.0), 230.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    let center = pos2(rect.center().x, rect.bottom() - 50.0);
    let radius = (rect.width() / 2.0 - 20.0).min(rect.height() - 70.0);
    let point_at = |angle: f32, r: f32| -> Pos2 { center + r * vec2(angle.cos(), -angle.sin()) };
    let arc = |from: f32, to: f32| -> Vec<Pos2> {
        (0..=64)
            .map(|k| point_at(from + (to - from) * k as f32 / 64.0, radius))
            .collect()
    };

    let visuals = ui.visuals();
    let track = visuals.widgets.inactive.bg_fill;
    let text_color = visuals.text_color();
    let angle = dial_angle(spec.value, &spec.range);

    painter.add(Shape::line(arc(PI, 0.0), Stroke::new(22.0, track)));
    painter.add(Shape::line(arc(PI, angle), Stroke::new(22.0, GAUGE_BAR)));
    painter.line_segment(
        [center, point_at(angle, radius - 14.0)],
        Stroke::new(3.0, text_color),
    );
    painter.circle_filled(center, 5.0, text_color);

    let tick_font = FontId::proportional(13.0);
    painter.text(
        point_at(PI, radius) + vec2(0.0, 16.0),
        Align2::CENTER_TOP,
        format!("{}", spec.range.start()),
        tick_font.clone(),
        text_color,
    );
    painter.text(
        point_at(0.0, radius) + vec2(0.0, 16.0),
        Align2::CENTER_TOP,
        format!("{}", spec.range.end()),
        tick_font,
        text_color,
    );
    painter.text(
        center + vec2(0.0, 12.0),
        Align2::CENTER_TOP,
        format!("{:.2}", spec.value),
        FontId::proportional(30.0),
        text_color,
    );

    response.on_hover_text(format!("{}: {:.2}%", spec.title, spec.value));
}
