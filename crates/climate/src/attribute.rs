use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The climate variable a map is colored by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateAttribute {
    /// Mean annual air temperature.
    #[default]
    Temperature,
    /// Annual precipitation total.
    Precipitation,
    /// Annual sunshine duration.
    Sunshine,
}

impl ClimateAttribute {
    /// All attributes in selector order.
    pub const ALL: [ClimateAttribute; 3] = [Self::Temperature, Self::Precipitation, Self::Sunshine];

    /// Returns the next attribute in the cycle (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the previous attribute in the cycle (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Lowercase identifier used in config files and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
            Self::Sunshine => "sunshine",
        }
    }

    /// Human-readable label for selectors, legend and readout.
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Precipitation => "Precipitation",
            Self::Sunshine => "Sunshine",
        }
    }

    /// Unit of the yearly values.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Precipitation => "mm",
            Self::Sunshine => "h",
        }
    }
}

impl fmt::Display for ClimateAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClimateAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown climate attribute '{s}'"))
    }
}
