//! Loading yearly climate series from disk.
//!
//! Two formats are accepted, chosen by file extension:
//! - `.json`: an array of flat records, `{"year": 2000, "Bayern": 8.9, ...}`
//! - anything else: a DWD regional-averages text export (see [`dwd`]).

mod dwd;
#[cfg(test)]
mod tests;

use std::path::Path;

use bevy::prelude::*;

use crate::attribute::ClimateAttribute;
use crate::dataset::{AttributeSeries, ClimateDatasets, YearRecord};
use crate::error::DataError;
use crate::settings::AtlasSettings;

/// Parse JSON records in the flat `year + region fields` shape.
pub fn parse_json_records(json: &str) -> Result<Vec<YearRecord>, DataError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a DWD regional-averages export.
pub fn parse_dwd_records(bytes: &[u8]) -> Result<Vec<YearRecord>, DataError> {
    dwd::parse_regional_averages(bytes)
}

pub fn load_series(attribute: ClimateAttribute, path: &Path) -> Result<AttributeSeries, DataError> {
    let bytes = std::fs::read(path).map_err(|e| DataError::io(path, e))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let records = if is_json {
        let text = String::from_utf8_lossy(&bytes);
        parse_json_records(&text)?
    } else {
        parse_dwd_records(&bytes)?
    };
    AttributeSeries::from_records(attribute, records)
}

/// Load every attribute named in `settings`.
///
/// Failures leave that attribute empty; the maps then show the no-data fill.
pub fn load_datasets(settings: &AtlasSettings) -> ClimateDatasets {
    let mut datasets = ClimateDatasets::default();
    for attribute in ClimateAttribute::ALL {
        let path = settings.data_path(attribute);
        match load_series(attribute, &path) {
            Ok(mut series) => {
                let total = series.len();
                series.retain_years(settings.first_year, settings.last_year);
                info!(
                    "Loaded {} data: {} of {} years in {}..={} from {}",
                    attribute.id(),
                    series.len(),
                    total,
                    settings.first_year,
                    settings.last_year,
                    path.display()
                );
                datasets.insert(series);
            }
            Err(e) if e.is_not_found() => {
                warn!("No {} data at {}; maps will show no data", attribute.id(), path.display());
            }
            Err(e) => {
                error!("Failed to load {} data: {}", attribute.id(), e);
            }
        }
    }
    datasets
}
