//! Life Expectancy Dashboard Application
//! Two screens (About, Dashboard) driven by one owned state struct; the
//! dashboard shows a chart, its story text, and the dataset window.

use crate::charts::{ChartKind, ChartPlotter, build_chart};
use crate::data::{CountrySelection, Dataset};
use crate::gui::{AboutScreen, DashboardAction, DashboardPanel, DatasetTable};
use crate::story;
use egui::{RichText, ScrollArea, SidePanel, TopBottomPanel};

/// The two top-level screens. No history stack; switching is a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    About,
    Dashboard,
}

/// Main application window.
pub struct DashboardApp {
    dataset: Dataset,
    screen: Screen,
    selection: CountrySelection,
    chart: Option<ChartKind>,
    dataset_window_open: bool,
    about: AboutScreen,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self {
            dataset: Dataset::new(),
            screen: Screen::About,
            selection: CountrySelection::All,
            chart: None,
            dataset_window_open: false,
            about: AboutScreen::new(),
        }
    }
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selection(&self) -> CountrySelection {
        self.selection
    }

    pub fn current_chart(&self) -> Option<ChartKind> {
        self.chart
    }

    /// Switch between the two screens. Selection and chart state stay as-is.
    pub fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn select_chart(&mut self, kind: ChartKind) {
        self.chart = Some(kind);
    }

    /// Changing the country re-targets the current chart kind, defaulting to
    /// the bar chart when nothing is shown yet.
    pub fn change_selection(&mut self, selection: CountrySelection) {
        self.selection = selection;
        if self.chart.is_none() {
            self.chart = Some(ChartKind::Bar);
        }
    }

    fn handle_action(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::None => {}
            DashboardAction::SelectionChanged(selection) => self.change_selection(selection),
            DashboardAction::ShowChart(kind) => self.select_chart(kind),
            DashboardAction::ViewDataset => self.dataset_window_open = true,
            DashboardAction::ShowAbout => self.show_screen(Screen::About),
        }
    }

    fn show_dashboard(&mut self, ctx: &egui::Context) {
        let mut action = DashboardAction::None;

        TopBottomPanel::top("dashboard_controls").show(ctx, |ui| {
            ui.add_space(4.0);
            action = DashboardPanel::show(ui, self.selection);
            ui.add_space(4.0);
        });

        SidePanel::right("story_panel")
            .min_width(300.0)
            .max_width(400.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("Story").size(16.0).strong());
                ui.separator();
                ScrollArea::vertical().show(ui, |ui| {
                    let text = match self.chart {
                        Some(kind) => story::story_for(self.selection, kind),
                        None => "Select a chart to see its story.",
                    };
                    ui.label(RichText::new(text).size(14.0));
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.chart {
                Some(kind) => {
                    let spec = build_chart(&self.dataset, self.selection, kind);
                    ChartPlotter::draw(ui, &spec);
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("Pick a chart type above").size(20.0));
                    });
                }
            }
        });

        DatasetTable::show(ctx, &mut self.dataset_window_open, &self.dataset);

        self.handle_action(action);
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::About => {
                let view_dashboard = egui::CentralPanel::default()
                    .show(ctx, |ui| self.about.show(ctx, ui))
                    .inner;
                if view_dashboard {
                    self.show_screen(Screen::Dashboard);
                }
            }
            Screen::Dashboard => self.show_dashboard(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Country;

    #[test]
    fn starts_on_about_with_all_countries() {
        let app = DashboardApp::default();
        assert_eq!(app.screen(), Screen::About);
        assert_eq!(app.selection(), CountrySelection::All);
        assert_eq!(app.current_chart(), None);
    }

    #[test]
    fn screen_switching_preserves_selection_and_chart() {
        let mut app = DashboardApp::default();
        app.change_selection(CountrySelection::One(Country::India));
        app.select_chart(ChartKind::Scatter);

        app.show_screen(Screen::Dashboard);
        app.show_screen(Screen::About);
        app.show_screen(Screen::Dashboard);

        assert_eq!(app.selection(), CountrySelection::One(Country::India));
        assert_eq!(app.current_chart(), Some(ChartKind::Scatter));
    }

    #[test]
    fn selection_change_defaults_to_bar_chart() {
        let mut app = DashboardApp::default();
        assert_eq!(app.current_chart(), None);
        app.change_selection(CountrySelection::One(Country::China));
        assert_eq!(app.current_chart(), Some(ChartKind::Bar));

        // An explicit chart choice survives later selection changes.
        app.select_chart(ChartKind::Pie);
        app.change_selection(CountrySelection::All);
        assert_eq!(app.current_chart(), Some(ChartKind::Pie));
    }

    #[test]
    fn dashboard_actions_update_state() {
        let mut app = DashboardApp::default();
        app.handle_action(DashboardAction::ShowChart(ChartKind::Line));
        assert_eq!(app.current_chart(), Some(ChartKind::Line));

        app.handle_action(DashboardAction::ViewDataset);
        assert!(app.dataset_window_open);

        app.handle_action(DashboardAction::ShowAbout);
        assert_eq!(app.screen(), Screen::About);
    }
}
