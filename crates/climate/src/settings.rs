//! Atlas configuration: data locations and the selectable year range.
//!
//! Resolution order: built-in defaults, then an optional JSON file named by
//! `CLIMATE_ATLAS_CONFIG`, then the `CLIMATE_ATLAS_DATA_DIR` and
//! `CLIMATE_ATLAS_GEOMETRY` overrides.

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::attribute::ClimateAttribute;
use crate::error::DataError;

pub const CONFIG_ENV: &str = "CLIMATE_ATLAS_CONFIG";
pub const DATA_DIR_ENV: &str = "CLIMATE_ATLAS_DATA_DIR";
pub const GEOMETRY_ENV: &str = "CLIMATE_ATLAS_GEOMETRY";

pub const DEFAULT_FIRST_YEAR: u16 = 1981;
pub const DEFAULT_LAST_YEAR: u16 = 2023;
pub const DEFAULT_LEFT_YEAR: u16 = 2000;
pub const DEFAULT_RIGHT_YEAR: u16 = 2023;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasSettings {
    /// Directory holding the three yearly data files.
    pub data_dir: PathBuf,
    pub temperature_file: String,
    pub precipitation_file: String,
    pub sunshine_file: String,
    /// GeoJSON FeatureCollection of the federal states.
    pub geometry_path: PathBuf,
    pub first_year: u16,
    pub last_year: u16,
    pub default_left_year: u16,
    pub default_right_year: u16,
}

impl Default for AtlasSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            temperature_file: "regional_averages_tm_year.txt".to_string(),
            precipitation_file: "regional_averages_rr_year.txt".to_string(),
            sunshine_file: "regional_averages_sd_year.txt".to_string(),
            geometry_path: PathBuf::from("assets/bundeslaender.geo.json"),
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
            default_left_year: DEFAULT_LEFT_YEAR,
            default_right_year: DEFAULT_RIGHT_YEAR,
        }
    }
}

impl AtlasSettings {
    /// Defaults, overlaid with the config file and environment overrides.
    pub fn from_env() -> Self {
        let env_path = |key: &str| std::env::var_os(key).map(PathBuf::from);
        Self::resolve(
            env_path(CONFIG_ENV).as_deref(),
            env_path(DATA_DIR_ENV),
            env_path(GEOMETRY_ENV),
        )
    }

    /// Build settings from an optional config file plus path overrides.
    ///
    /// A config file that cannot be read or fails validation is logged and
    /// replaced by the defaults; the overrides apply either way.
    pub fn resolve(config: Option<&Path>, data_dir: Option<PathBuf>, geometry: Option<PathBuf>) -> Self {
        let mut settings = match config {
            Some(path) => Self::from_file(path).unwrap_or_else(|e| {
                error!("{e}; falling back to default settings");
                Self::default()
            }),
            None => Self::default(),
        };
        settings.apply_overrides(data_dir, geometry);
        settings
    }

    pub fn apply_overrides(&mut self, data_dir: Option<PathBuf>, geometry: Option<PathBuf>) {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if let Some(path) = geometry {
            self.geometry_path = path;
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_json(&text)
    }

    /// Parse settings JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), DataError> {
        if self.first_year > self.last_year {
            return Err(DataError::InvalidSettings(format!(
                "first_year {} is after last_year {}",
                self.first_year, self.last_year
            )));
        }
        for (name, year) in [
            ("default_left_year", self.default_left_year),
            ("default_right_year", self.default_right_year),
        ] {
            if !(self.first_year..=self.last_year).contains(&year) {
                return Err(DataError::InvalidSettings(format!(
                    "{name} {year} is outside {}..={}",
                    self.first_year, self.last_year
                )));
            }
        }
        Ok(())
    }

    /// Years offered in the year selectors.
    pub fn selectable_years(&self) -> impl DoubleEndedIterator<Item = u16> {
        self.first_year..=self.last_year
    }

    pub fn data_path(&self, attribute: ClimateAttribute) -> PathBuf {
        let file = match attribute {
            ClimateAttribute::Temperature => &self.temperature_file,
            ClimateAttribute::Precipitation => &self.precipitation_file,
            ClimateAttribute::Sunshine => &self.sunshine_file,
        };
        self.data_dir.join(file)
    }
}
