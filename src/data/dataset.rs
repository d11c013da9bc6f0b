//! Dataset Module
//! The fixed WHO life expectancy / HALE sample table and its typed accessor.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Unknown country: {0}")]
    UnknownCountry(String),
    #[error("Unknown year: {0} (dataset covers 2010, 2015, 2019)")]
    UnknownYear(u16),
    #[error("Unknown chart type: {0}")]
    UnknownChartKind(String),
}

/// The three sample years covered by the dataset.
pub const YEARS: [u16; 3] = [2010, 2015, 2019];

/// The four countries in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    Australia,
    China,
    India,
    UnitedStates,
}

impl Country {
    pub const ALL: [Country; 4] = [
        Country::Australia,
        Country::China,
        Country::India,
        Country::UnitedStates,
    ];

    fn index(self) -> usize {
        match self {
            Country::Australia => 0,
            Country::China => 1,
            Country::India => 2,
            Country::UnitedStates => 3,
        }
    }

    /// Full official name, as used in titles and table rows.
    pub fn name(self) -> &'static str {
        match self {
            Country::Australia => "Australia",
            Country::China => "China",
            Country::India => "India",
            Country::UnitedStates => "United States of America",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Country {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DatasetError::UnknownCountry(s.to_string()))
    }
}

/// The four tracked quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    LifeExpectancyAtBirth,
    LifeExpectancyAtAge60,
    HaleAtBirth,
    HaleAtAge60,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::LifeExpectancyAtBirth,
        Metric::LifeExpectancyAtAge60,
        Metric::HaleAtBirth,
        Metric::HaleAtAge60,
    ];

    fn index(self) -> usize {
        match self {
            Metric::LifeExpectancyAtBirth => 0,
            Metric::LifeExpectancyAtAge60 => 1,
            Metric::HaleAtBirth => 2,
            Metric::HaleAtAge60 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::LifeExpectancyAtBirth => "Life Expectancy at Birth",
            Metric::LifeExpectancyAtAge60 => "Life Expectancy at Age 60",
            Metric::HaleAtBirth => "HALE at Birth",
            Metric::HaleAtAge60 => "HALE at Age 60",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Either a single country or the aggregate "All Countries" view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountrySelection {
    All,
    One(Country),
}

impl fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountrySelection::All => f.write_str("All Countries"),
            CountrySelection::One(c) => f.write_str(c.name()),
        }
    }
}

impl FromStr for CountrySelection {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All Countries" {
            Ok(CountrySelection::All)
        } else {
            s.parse::<Country>().map(CountrySelection::One)
        }
    }
}

/// Values indexed [country][metric][year], years in the order of `YEARS`.
/// WHO sample figures for 2010 / 2015 / 2019, both sexes.
const VALUES: [[[f64; 3]; 4]; 4] = [
    // Australia
    [
        [81.9, 80.4, 79.8],
        [24.7, 23.3, 26.1],
        [70.2, 69.2, 71.2],
        [18.4, 17.5, 19.3],
    ],
    // China
    [
        [74.9, 73.9, 72.3],
        [19.6, 17.9, 21.5],
        [66.7, 65.3, 68.2],
        [14.9, 14.0, 15.9],
    ],
    // India
    [
        [67.2, 65.7, 68.9],
        [18.0, 16.9, 19.0],
        [57.3, 57.0, 57.6],
        [12.6, 12.1, 13.0],
    ],
    // United States of America
    [
        [78.6, 76.3, 80.8],
        [23.0, 21.5, 24.2],
        [66.7, 65.7, 67.7],
        [16.5, 15.6, 17.2],
    ],
];

/// One row of the tabular view: a (country, year) pair with its four metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetRow {
    pub country: Country,
    pub year: u16,
    pub values: [f64; 4],
}

/// Typed accessor over the fixed table. Stateless; the table itself is a
/// compile-time constant, so this is free to construct anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dataset;

impl Dataset {
    pub fn new() -> Self {
        Dataset
    }

    fn year_index(year: u16) -> Result<usize, DatasetError> {
        YEARS
            .iter()
            .position(|&y| y == year)
            .ok_or(DatasetError::UnknownYear(year))
    }

    /// Exact table value for a (country, metric, year) triple.
    pub fn value(&self, country: Country, metric: Metric, year: u16) -> Result<f64, DatasetError> {
        let yi = Self::year_index(year)?;
        Ok(VALUES[country.index()][metric.index()][yi])
    }

    /// The four metric values for one (country, year) pair, in `Metric::ALL`
    /// order.
    pub fn metrics_for(&self, country: Country, year: u16) -> Result<[f64; 4], DatasetError> {
        let yi = Self::year_index(year)?;
        let by_metric = &VALUES[country.index()];
        Ok([
            by_metric[0][yi],
            by_metric[1][yi],
            by_metric[2][yi],
            by_metric[3][yi],
        ])
    }

    /// All three (year, value) points for one (country, metric) pair.
    pub fn series(&self, country: Country, metric: Metric) -> [(u16, f64); 3] {
        let row = &VALUES[country.index()][metric.index()];
        [(YEARS[0], row[0]), (YEARS[1], row[1]), (YEARS[2], row[2])]
    }

    /// Every value for one country, indexed [metric][year] in `Metric::ALL`
    /// and `YEARS` order.
    pub fn country_values(&self, country: Country) -> [[f64; 3]; 4] {
        VALUES[country.index()]
    }

    /// Rows for the tabular view: one per (country, year), country-major.
    pub fn rows(&self) -> impl Iterator<Item = DatasetRow> + '_ {
        Country::ALL.into_iter().flat_map(move |country| {
            YEARS.into_iter().map(move |year| DatasetRow {
                country,
                year,
                // Year comes from YEARS, so the lookup cannot fail.
                values: self.metrics_for(country, year).unwrap_or([0.0; 4]),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_literals() {
        let ds = Dataset::new();
        assert_eq!(
            ds.value(Country::Australia, Metric::LifeExpectancyAtBirth, 2010)
                .unwrap(),
            81.9
        );
        assert_eq!(
            ds.value(Country::China, Metric::HaleAtBirth, 2010).unwrap(),
            66.7
        );
        assert_eq!(
            ds.value(Country::India, Metric::HaleAtAge60, 2019).unwrap(),
            13.0
        );
        assert_eq!(
            ds.value(Country::UnitedStates, Metric::LifeExpectancyAtAge60, 2015)
                .unwrap(),
            21.5
        );
    }

    #[test]
    fn full_cross_product_has_a_value() {
        let ds = Dataset::new();
        for country in Country::ALL {
            for metric in Metric::ALL {
                for year in YEARS {
                    let v = ds.value(country, metric, year).unwrap();
                    assert!(v >= 0.0, "{country}/{metric}/{year} negative");
                }
            }
        }
    }

    #[test]
    fn unknown_country_is_an_error() {
        let err = "Brazil".parse::<Country>().unwrap_err();
        assert_eq!(err, DatasetError::UnknownCountry("Brazil".to_string()));

        let err = "Brazil".parse::<CountrySelection>().unwrap_err();
        assert_eq!(err, DatasetError::UnknownCountry("Brazil".to_string()));
    }

    #[test]
    fn unknown_year_is_an_error() {
        let ds = Dataset::new();
        let err = ds
            .value(Country::Australia, Metric::HaleAtBirth, 2020)
            .unwrap_err();
        assert_eq!(err, DatasetError::UnknownYear(2020));
        assert!(ds.metrics_for(Country::China, 1999).is_err());
    }

    #[test]
    fn metrics_for_matches_per_metric_values() {
        let ds = Dataset::new();
        let four = ds.metrics_for(Country::Australia, 2010).unwrap();
        assert_eq!(four, [81.9, 24.7, 70.2, 18.4]);
    }

    #[test]
    fn country_values_give_all_years_for_all_metrics() {
        let ds = Dataset::new();
        let table = ds.country_values(Country::UnitedStates);
        assert_eq!(table[0], [78.6, 76.3, 80.8]);
        assert_eq!(table[3], [16.5, 15.6, 17.2]);
    }

    #[test]
    fn series_covers_all_three_years() {
        let ds = Dataset::new();
        let s = ds.series(Country::India, Metric::LifeExpectancyAtBirth);
        assert_eq!(s, [(2010, 67.2), (2015, 65.7), (2019, 68.9)]);
    }

    #[test]
    fn rows_cover_every_country_and_year() {
        let ds = Dataset::new();
        let rows: Vec<_> = ds.rows().collect();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].country, Country::Australia);
        assert_eq!(rows[0].year, 2010);
        assert_eq!(rows[0].values, [81.9, 24.7, 70.2, 18.4]);
        // Last country is present (the table view must not drop it).
        assert!(rows.iter().any(|r| r.country == Country::UnitedStates));
    }

    #[test]
    fn selection_display_round_trips() {
        assert_eq!(CountrySelection::All.to_string(), "All Countries");
        assert_eq!(
            "All Countries".parse::<CountrySelection>().unwrap(),
            CountrySelection::All
        );
        assert_eq!(
            "United States of America".parse::<CountrySelection>().unwrap(),
            CountrySelection::One(Country::UnitedStates)
        );
    }
}
