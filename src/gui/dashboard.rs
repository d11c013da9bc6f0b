//! Dashboard Controls Widget
//! Top row with the country selector and chart buttons, in the style of the
//! original button bar.

use crate::charts::ChartKind;
use crate::data::{Country, CountrySelection};
use egui::{ComboBox, RichText};

/// Actions triggered by the dashboard controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardAction {
    None,
    SelectionChanged(CountrySelection),
    ShowChart(ChartKind),
    ViewDataset,
    ShowAbout,
}

/// Draws the top control row. Stateless; current values come in by argument
/// and changes go out as a `DashboardAction`.
pub struct DashboardPanel;

impl DashboardPanel {
    pub fn show(ui: &mut egui::Ui, selection: CountrySelection) -> DashboardAction {
        let mut action = DashboardAction::None;

        ui.horizontal(|ui| {
            ComboBox::from_id_salt("country_selector")
                .width(200.0)
                .selected_text(selection.to_string())
                .show_ui(ui, |ui| {
                    let mut choose = |ui: &mut egui::Ui, candidate: CountrySelection| {
                        if ui
                            .selectable_label(selection == candidate, candidate.to_string())
                            .clicked()
                            && selection != candidate
                        {
                            action = DashboardAction::SelectionChanged(candidate);
                        }
                    };

                    choose(ui, CountrySelection::All);
                    for country in Country::ALL {
                        choose(ui, CountrySelection::One(country));
                    }
                });

            ui.add_space(10.0);

            for kind in ChartKind::ALL {
                if ui.button(RichText::new(kind.label()).size(14.0)).clicked() {
                    action = DashboardAction::ShowChart(kind);
                }
            }

            ui.add_space(10.0);

            if ui.button(RichText::new("View Dataset").size(14.0)).clicked() {
                action = DashboardAction::ViewDataset;
            }
            if ui.button(RichText::new("About").size(14.0)).clicked() {
                action = DashboardAction::ShowAbout;
            }
        });

        action
    }
}
