//! Chart Builder Module
//! Pure functions mapping a (country selection, chart kind) pair to a
//! renderable chart specification. No GUI types here.

use crate::data::{Country, CountrySelection, Dataset, DatasetError, Metric, YEARS};
use std::fmt;
use std::str::FromStr;

/// The four chart kinds offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
    ];

    /// Button label, also the string key of the original UI.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Scatter => "Scatter Plot",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::ALL
            .into_iter()
            .find(|k| k.label() == s)
            .ok_or_else(|| DatasetError::UnknownChartKind(s.to_string()))
    }
}

/// One named series over labelled categories (bar charts).
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub name: String,
    /// Parallel to the chart's `categories`.
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<CategorySeries>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XyKind {
    Line,
    Scatter,
}

/// One named series of (year, value) points (line and scatter charts).
#[derive(Debug, Clone, PartialEq)]
pub struct XySeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XyChart {
    pub title: String,
    pub kind: XyKind,
    pub series: Vec<XySeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// A fully specified chart, ready for the plotter.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Category(CategoryChart),
    Xy(XyChart),
    Pie(PieChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Category(c) => &c.title,
            ChartSpec::Xy(c) => &c.title,
            ChartSpec::Pie(c) => &c.title,
        }
    }
}

/// Build the chart specification for a selection and chart kind.
pub fn build_chart(dataset: &Dataset, selection: CountrySelection, kind: ChartKind) -> ChartSpec {
    match kind {
        ChartKind::Bar => ChartSpec::Category(build_bar(dataset, selection)),
        ChartKind::Line => ChartSpec::Xy(build_xy(dataset, selection, XyKind::Line)),
        ChartKind::Pie => ChartSpec::Pie(build_pie(dataset, selection)),
        ChartKind::Scatter => ChartSpec::Xy(build_xy(dataset, selection, XyKind::Scatter)),
    }
}

fn build_bar(dataset: &Dataset, selection: CountrySelection) -> CategoryChart {
    let title = format!("Life Expectancy and HALE for {selection}");

    let categories: Vec<String> = match selection {
        CountrySelection::One(_) => YEARS.iter().map(|y| y.to_string()).collect(),
        CountrySelection::All => Country::ALL
            .iter()
            .flat_map(|c| YEARS.iter().map(move |y| format!("{c} - {y}")))
            .collect(),
    };

    let series = Metric::ALL
        .into_iter()
        .map(|metric| {
            let values: Vec<f64> = match selection {
                CountrySelection::One(country) => dataset
                    .series(country, metric)
                    .into_iter()
                    .map(|(_, v)| v)
                    .collect(),
                CountrySelection::All => Country::ALL
                    .into_iter()
                    .flat_map(|country| {
                        dataset.series(country, metric).into_iter().map(|(_, v)| v)
                    })
                    .collect(),
            };
            CategorySeries {
                name: metric.label().to_string(),
                values,
            }
        })
        .collect();

    CategoryChart {
        title,
        categories,
        series,
    }
}

fn build_xy(dataset: &Dataset, selection: CountrySelection, kind: XyKind) -> XyChart {
    let title = match kind {
        XyKind::Line => format!("Life Expectancy and HALE Trends for {selection}"),
        XyKind::Scatter => format!("Life Expectancy and HALE Scatter Plot for {selection}"),
    };

    let metric_series = |country: Country, metric: Metric, name: String| XySeries {
        name,
        points: dataset
            .series(country, metric)
            .into_iter()
            .map(|(year, value)| [year as f64, value])
            .collect(),
    };

    let series: Vec<XySeries> = match selection {
        CountrySelection::One(country) => Metric::ALL
            .into_iter()
            .map(|m| metric_series(country, m, m.label().to_string()))
            .collect(),
        CountrySelection::All => Country::ALL
            .into_iter()
            .flat_map(|country| {
                Metric::ALL
                    .into_iter()
                    .map(move |m| (country, m, format!("{country} {m}")))
            })
            .map(|(c, m, name)| metric_series(c, m, name))
            .collect(),
    };

    XyChart {
        title,
        kind,
        series,
    }
}

/// Pie charts for a single country use only the first year (2010) per metric.
/// Deliberate simplification carried over from the original dashboard; the
/// story text refers to it, so it stays.
fn build_pie(dataset: &Dataset, selection: CountrySelection) -> PieChart {
    let title = format!("Life Expectancy and HALE Distribution for {selection}");

    let slices: Vec<PieSlice> = match selection {
        CountrySelection::One(country) => Metric::ALL
            .into_iter()
            .map(|metric| PieSlice {
                label: metric.label().to_string(),
                // Year comes from YEARS, so the lookup cannot fail.
                value: dataset.value(country, metric, YEARS[0]).unwrap_or(0.0),
            })
            .collect(),
        CountrySelection::All => Country::ALL
            .into_iter()
            .flat_map(|country| {
                YEARS.into_iter().flat_map(move |year| {
                    Metric::ALL.into_iter().map(move |metric| (country, year, metric))
                })
            })
            .map(|(country, year, metric)| PieSlice {
                label: format!("{country} - {year} {metric}"),
                value: dataset.value(country, metric, year).unwrap_or(0.0),
            })
            .collect(),
    };

    PieChart { title, slices }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds() -> Dataset {
        Dataset::new()
    }

    #[test]
    fn bar_single_country_shape() {
        let spec = build_chart(&ds(), CountrySelection::One(Country::Australia), ChartKind::Bar);
        let ChartSpec::Category(chart) = spec else {
            panic!("bar chart must be categorical");
        };
        assert_eq!(chart.title, "Life Expectancy and HALE for Australia");
        assert_eq!(chart.categories, vec!["2010", "2015", "2019"]);
        assert_eq!(chart.series.len(), 4);
        for s in &chart.series {
            assert_eq!(s.values.len(), 3);
        }
        assert_eq!(chart.series[0].name, "Life Expectancy at Birth");
        assert_eq!(chart.series[0].values[0], 81.9);
    }

    #[test]
    fn bar_all_countries_shape() {
        let spec = build_chart(&ds(), CountrySelection::All, ChartKind::Bar);
        let ChartSpec::Category(chart) = spec else {
            panic!("bar chart must be categorical");
        };
        assert_eq!(chart.title, "Life Expectancy and HALE for All Countries");
        assert_eq!(chart.categories.len(), 12);
        assert_eq!(chart.categories[0], "Australia - 2010");
        assert_eq!(chart.series.len(), 4);
        for s in &chart.series {
            assert_eq!(s.values.len(), 12);
        }
    }

    #[test]
    fn line_and_scatter_use_all_three_years() {
        for kind in [ChartKind::Line, ChartKind::Scatter] {
            let spec = build_chart(&ds(), CountrySelection::One(Country::China), kind);
            let ChartSpec::Xy(chart) = spec else {
                panic!("{kind} must be an XY chart");
            };
            assert_eq!(chart.series.len(), 4);
            for s in &chart.series {
                assert_eq!(s.points.len(), 3);
                assert_eq!(s.points[0][0], 2010.0);
                assert_eq!(s.points[2][0], 2019.0);
            }
        }
    }

    #[test]
    fn xy_all_countries_has_sixteen_series() {
        let spec = build_chart(&ds(), CountrySelection::All, ChartKind::Line);
        let ChartSpec::Xy(chart) = spec else {
            panic!("line chart must be an XY chart");
        };
        assert_eq!(chart.title, "Life Expectancy and HALE Trends for All Countries");
        assert_eq!(chart.series.len(), 16);
        assert_eq!(chart.series[0].name, "Australia Life Expectancy at Birth");
    }

    #[test]
    fn pie_single_country_uses_only_first_year() {
        let spec = build_chart(&ds(), CountrySelection::One(Country::Australia), ChartKind::Pie);
        let ChartSpec::Pie(chart) = spec else {
            panic!("pie chart expected");
        };
        assert_eq!(chart.slices.len(), 4);
        // 2010 column, not 2015 or 2019.
        assert_eq!(chart.slices[0].value, 81.9);
        assert_eq!(chart.slices[1].value, 24.7);
        assert_eq!(chart.slices[2].value, 70.2);
        assert_eq!(chart.slices[3].value, 18.4);
    }

    #[test]
    fn pie_all_countries_has_48_slices() {
        let spec = build_chart(&ds(), CountrySelection::All, ChartKind::Pie);
        let ChartSpec::Pie(chart) = spec else {
            panic!("pie chart expected");
        };
        assert_eq!(chart.slices.len(), 48);
        assert_eq!(chart.slices[0].label, "Australia - 2010 Life Expectancy at Birth");
    }

    #[test]
    fn chart_kind_labels_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.label().parse::<ChartKind>().unwrap(), kind);
        }
        assert!("Heatmap".parse::<ChartKind>().is_err());
    }

    #[test]
    fn scatter_title_names_the_selection() {
        let spec = build_chart(&ds(), CountrySelection::One(Country::India), ChartKind::Scatter);
        assert_eq!(
            spec.title(),
            "Life Expectancy and HALE Scatter Plot for India"
        );
    }
}
