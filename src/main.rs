//! Life Expectancy Dashboard
//!
//! Desktop viewer for a fixed WHO life expectancy / HALE sample dataset:
//! bar/line/pie/scatter charts per country with narrative text, plus a raw
//! table view.

mod charts;
mod data;
mod gui;
mod story;

use eframe::egui;
use gui::DashboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting Life Expectancy Dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Life Expectancy Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Life Expectancy Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
