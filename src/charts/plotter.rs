//! Chart Plotter Module
//! Renders chart specifications with egui_plot (bar/line/scatter) and the
//! raw painter (pie).

use crate::charts::builder::{CategoryChart, ChartSpec, PieChart, XyChart, XyKind};
use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Vec2};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};
use std::f32::consts::TAU;

/// Color palette for series and pie slices
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(26, 188, 156),  // Teal
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(0, 188, 212),   // Cyan
    Color32::from_rgb(255, 87, 34),   // Deep Orange
    Color32::from_rgb(121, 85, 72),   // Brown
];

const BAR_GROUP_WIDTH: f64 = 0.18;

/// Draws chart specifications into an egui Ui.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// Draw any chart spec, title included.
    pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(spec.title()).size(16.0).strong());
        });
        ui.add_space(6.0);

        match spec {
            ChartSpec::Category(chart) => Self::draw_bar_chart(ui, chart),
            ChartSpec::Xy(chart) => Self::draw_xy_chart(ui, chart),
            ChartSpec::Pie(chart) => Self::draw_pie_chart(ui, chart),
        }
    }

    /// Grouped vertical bars, one group per category.
    /// X-axis: categories, Y-axis: years of life.
    fn draw_bar_chart(ui: &mut egui::Ui, chart: &CategoryChart) {
        let categories = chart.categories.clone();
        let n_series = chart.series.len().max(1);
        let height = (ui.available_height() - 10.0).max(200.0);

        Plot::new(("bar", &chart.title))
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Value")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < categories.len() {
                    categories[idx].clone()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (si, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(si);
                    let offset = (si as f64 - (n_series - 1) as f64 / 2.0) * BAR_GROUP_WIDTH;
                    let bars: Vec<Bar> = series
                        .values
                        .iter()
                        .enumerate()
                        .map(|(ci, &v)| {
                            Bar::new(ci as f64 + offset, v)
                                .width(BAR_GROUP_WIDTH * 0.9)
                                .fill(color)
                        })
                        .collect();

                    plot_ui.bar_chart(BarChart::new(bars).color(color).name(&series.name));
                }
            });
    }

    /// Line or scatter chart, x = year.
    fn draw_xy_chart(ui: &mut egui::Ui, chart: &XyChart) {
        let height = (ui.available_height() - 10.0).max(200.0);

        Plot::new(("xy", &chart.title))
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Value")
            .x_axis_formatter(|mark, _range| {
                let year = mark.value.round();
                if (mark.value - year).abs() < 1e-6 {
                    format!("{year:.0}")
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                for (si, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(si);
                    let points = PlotPoints::from_iter(series.points.iter().copied());

                    match chart.kind {
                        XyKind::Line => {
                            plot_ui.line(Line::new(points).color(color).width(2.0).name(&series.name));
                        }
                        XyKind::Scatter => {
                            plot_ui.points(
                                Points::new(points).radius(4.0).color(color).name(&series.name),
                            );
                        }
                    }
                }
            });
    }

    /// Pie chart drawn as a triangle fan with a wrapped legend underneath.
    fn draw_pie_chart(ui: &mut egui::Ui, chart: &PieChart) {
        let total: f64 = chart.slices.iter().map(|s| s.value).sum();
        if total <= 0.0 {
            ui.label("No data");
            return;
        }

        let side = (ui.available_width().min(ui.available_height()) - 20.0).max(120.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::hover());
        let rect = response.rect;
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        // Start at 12 o'clock, sweep clockwise.
        let mut angle = -TAU / 4.0;
        for (i, slice) in chart.slices.iter().enumerate() {
            let sweep = (slice.value / total) as f32 * TAU;
            let steps = ((sweep / TAU * 64.0).ceil() as usize).max(2);

            let mut points: Vec<Pos2> = Vec::with_capacity(steps + 2);
            points.push(center);
            for step in 0..=steps {
                let a = angle + sweep * step as f32 / steps as f32;
                points.push(center + radius * Vec2::new(a.cos(), a.sin()));
            }
            painter.add(Shape::convex_polygon(
                points,
                Self::series_color(i),
                Stroke::new(1.0, Color32::WHITE),
            ));
            angle += sweep;
        }

        ui.add_space(8.0);
        ui.horizontal_wrapped(|ui| {
            for (i, slice) in chart.slices.iter().enumerate() {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(rect, 2.0, Self::series_color(i));
                ui.label(
                    RichText::new(format!("{} ({:.1})", slice.label, slice.value)).size(11.0),
                );
                ui.add_space(10.0);
            }
        });
    }
}
