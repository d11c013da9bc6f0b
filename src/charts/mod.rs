//! Charts module - chart specification building and rendering

mod builder;
mod plotter;

pub use builder::{
    CategoryChart, CategorySeries, ChartKind, ChartSpec, PieChart, PieSlice, XyChart, XyKind,
    XySeries, build_chart,
};
pub use plotter::ChartPlotter;
