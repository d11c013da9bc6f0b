//! GUI module - User interface components

mod about;
mod app;
mod dashboard;
mod data_table;

pub use about::AboutScreen;
pub use app::{DashboardApp, Screen};
pub use dashboard::{DashboardAction, DashboardPanel};
pub use data_table::DatasetTable;
