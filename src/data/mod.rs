//! Data module - the fixed life expectancy / HALE dataset

mod dataset;

pub use dataset::{Country, CountrySelection, Dataset, DatasetError, DatasetRow, Metric, YEARS};
