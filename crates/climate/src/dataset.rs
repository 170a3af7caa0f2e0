//! Yearly per-region climate records.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::attribute::ClimateAttribute;
use crate::error::DataError;
use crate::region_names::RegionNameMap;

/// One year of values, keyed by dataset region name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: u16,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl YearRecord {
    pub fn new(year: u16) -> Self {
        Self {
            year,
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, region: &str, value: f64) -> Self {
        self.values.insert(region.to_string(), value);
        self
    }

    pub fn value(&self, dataset_region: &str) -> Option<f64> {
        self.values.get(dataset_region).copied()
    }
}

/// Outcome of looking up a base-map region for a given attribute and year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionValue {
    Value(f64),
    /// The attribute has no record for the year.
    MissingYear,
    /// The year exists but has no column for the region.
    MissingRegion,
    /// The base-map region has no dataset name.
    UnmappedRegion,
}

impl RegionValue {
    pub fn value(self) -> Option<f64> {
        match self {
            RegionValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// All records for one attribute, sorted by year, at most one per year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSeries {
    attribute: ClimateAttribute,
    records: Vec<YearRecord>,
}

impl AttributeSeries {
    pub fn empty(attribute: ClimateAttribute) -> Self {
        Self {
            attribute,
            records: Vec::new(),
        }
    }

    /// Validate and sort `records`.
    ///
    /// Rejects duplicate years and values that are not finite and
    /// non-negative.
    pub fn from_records(
        attribute: ClimateAttribute,
        mut records: Vec<YearRecord>,
    ) -> Result<Self, DataError> {
        records.sort_by_key(|r| r.year);
        for pair in records.windows(2) {
            if pair[0].year == pair[1].year {
                return Err(DataError::DuplicateYear(pair[1].year));
            }
        }
        for record in &records {
            for (region, &value) in &record.values {
                if !value.is_finite() || value < 0.0 {
                    return Err(DataError::InvalidValue {
                        year: record.year,
                        region: region.clone(),
                        raw: value.to_string(),
                    });
                }
            }
        }
        Ok(Self { attribute, records })
    }

    pub fn attribute(&self) -> ClimateAttribute {
        self.attribute
    }

    pub fn record(&self, year: u16) -> Option<&YearRecord> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.records.iter().map(|r| r.year)
    }

    /// First and last year present.
    pub fn year_range(&self) -> Option<(u16, u16)> {
        Some((self.records.first()?.year, self.records.last()?.year))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the years in `first..=last`.
    pub fn retain_years(&mut self, first: u16, last: u16) {
        self.records.retain(|r| (first..=last).contains(&r.year));
    }
}

/// The loaded series for every attribute.
#[derive(Resource, Debug, Clone)]
pub struct ClimateDatasets {
    temperature: AttributeSeries,
    precipitation: AttributeSeries,
    sunshine: AttributeSeries,
}

impl Default for ClimateDatasets {
    fn default() -> Self {
        Self {
            temperature: AttributeSeries::empty(ClimateAttribute::Temperature),
            precipitation: AttributeSeries::empty(ClimateAttribute::Precipitation),
            sunshine: AttributeSeries::empty(ClimateAttribute::Sunshine),
        }
    }
}

impl ClimateDatasets {
    pub fn series(&self, attribute: ClimateAttribute) -> &AttributeSeries {
        match attribute {
            ClimateAttribute::Temperature => &self.temperature,
            ClimateAttribute::Precipitation => &self.precipitation,
            ClimateAttribute::Sunshine => &self.sunshine,
        }
    }

    /// Replace the series for its attribute.
    pub fn insert(&mut self, series: AttributeSeries) {
        match series.attribute() {
            ClimateAttribute::Temperature => self.temperature = series,
            ClimateAttribute::Precipitation => self.precipitation = series,
            ClimateAttribute::Sunshine => self.sunshine = series,
        }
    }

    pub fn lookup(&self, attribute: ClimateAttribute, year: u16) -> Option<&YearRecord> {
        self.series(attribute).record(year)
    }

    /// Resolve a base-map region to its value via the name mapping.
    pub fn value_for_drawing_region(
        &self,
        attribute: ClimateAttribute,
        year: u16,
        drawing_name: &str,
        names: &RegionNameMap,
    ) -> RegionValue {
        let Some(record) = self.lookup(attribute, year) else {
            return RegionValue::MissingYear;
        };
        let Some(dataset_name) = names.dataset_name(drawing_name) else {
            return RegionValue::UnmappedRegion;
        };
        record
            .value(dataset_name)
            .map_or(RegionValue::MissingRegion, RegionValue::Value)
    }

    pub fn is_empty(&self) -> bool {
        ClimateAttribute::ALL
            .iter()
            .all(|&a| self.series(a).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature_series() -> AttributeSeries {
        AttributeSeries::from_records(
            ClimateAttribute::Temperature,
            vec![
                YearRecord::new(2023)
                    .with_value("Bayern", 9.6)
                    .with_value("Brandenburg/Berlin", 10.7),
                YearRecord::new(2000)
                    .with_value("Bayern", 8.9)
                    .with_value("Brandenburg/Berlin", 10.1),
            ],
        )
        .unwrap()
    }

    #[test]
    fn records_are_sorted_by_year() {
        let series = temperature_series();
        assert_eq!(series.years().collect::<Vec<_>>(), vec![2000, 2023]);
        assert_eq!(series.year_range(), Some((2000, 2023)));
    }

    #[test]
    fn duplicate_years_are_rejected() {
        let result = AttributeSeries::from_records(
            ClimateAttribute::Sunshine,
            vec![YearRecord::new(1999), YearRecord::new(1999)],
        );
        assert!(matches!(result, Err(DataError::DuplicateYear(1999))));
    }

    #[test]
    fn negative_and_non_finite_values_are_rejected() {
        let negative = AttributeSeries::from_records(
            ClimateAttribute::Precipitation,
            vec![YearRecord::new(2001).with_value("Hessen", -3.0)],
        );
        assert!(matches!(negative, Err(DataError::InvalidValue { year: 2001, .. })));

        let nan = AttributeSeries::from_records(
            ClimateAttribute::Precipitation,
            vec![YearRecord::new(2001).with_value("Hessen", f64::NAN)],
        );
        assert!(nan.is_err());
    }

    #[test]
    fn lookup_missing_year_is_none() {
        let mut datasets = ClimateDatasets::default();
        datasets.insert(temperature_series());
        assert!(datasets.lookup(ClimateAttribute::Temperature, 2000).is_some());
        assert!(datasets.lookup(ClimateAttribute::Temperature, 1985).is_none());
        assert!(datasets.lookup(ClimateAttribute::Sunshine, 2000).is_none());
    }

    #[test]
    fn drawing_region_resolution() {
        let mut datasets = ClimateDatasets::default();
        datasets.insert(temperature_series());
        let names = RegionNameMap::default();
        let attr = ClimateAttribute::Temperature;

        assert_eq!(
            datasets.value_for_drawing_region(attr, 2000, "Berlin", &names),
            RegionValue::Value(10.1)
        );
        assert_eq!(
            datasets.value_for_drawing_region(attr, 2000, "Hessen", &names),
            RegionValue::MissingRegion
        );
        assert_eq!(
            datasets.value_for_drawing_region(attr, 2000, "Atlantis", &names),
            RegionValue::UnmappedRegion
        );
        assert_eq!(
            datasets.value_for_drawing_region(attr, 1970, "Bayern", &names),
            RegionValue::MissingYear
        );
    }

    #[test]
    fn retain_years_trims_series() {
        let mut series = temperature_series();
        series.retain_years(1981, 2010);
        assert_eq!(series.len(), 1);
        assert!(series.record(2023).is_none());
    }

    #[test]
    fn year_record_json_shape_is_flat() {
        let record: YearRecord =
            serde_json::from_str(r#"{"year": 2010, "Bayern": 7.4, "Saarland": 9.0}"#).unwrap();
        assert_eq!(record.year, 2010);
        assert_eq!(record.value("Saarland"), Some(9.0));
        assert_eq!(record.values.len(), 2);
    }
}
