//! Dataset Table Window
//! Raw tabular view of the full 12-row dataset, one window toggled from the
//! dashboard.

use crate::data::{Dataset, Metric};
use egui::{RichText, ScrollArea};

pub struct DatasetTable;

impl DatasetTable {
    pub fn show(ctx: &egui::Context, open: &mut bool, dataset: &Dataset) {
        egui::Window::new("Life Expectancy Dataset")
            .open(open)
            .default_size([800.0, 400.0])
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("dataset_table")
                        .striped(true)
                        .min_col_width(80.0)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Country").strong());
                            ui.label(RichText::new("Year").strong());
                            for metric in Metric::ALL {
                                ui.label(RichText::new(metric.label()).strong());
                            }
                            ui.end_row();

                            for row in dataset.rows() {
                                ui.label(row.country.name());
                                ui.label(row.year.to_string());
                                for value in row.values {
                                    ui.label(format!("{value:.1}"));
                                }
                                ui.end_row();
                            }
                        });
                });
            });
    }
}
