// ---------------------------------------------------------------------------
// DataError: typed errors for loading climate data, settings and geometry
// ---------------------------------------------------------------------------

use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading or validating the atlas inputs.
#[derive(Debug)]
pub enum DataError {
    /// I/O error (file not found, permission denied, etc.)
    Io { path: PathBuf, source: std::io::Error },
    /// JSON records or settings could not be decoded.
    Json(serde_json::Error),
    /// A DWD regional-averages row could not be read.
    Csv(csv::Error),
    /// The DWD file never contained the `Jahr;Monat;...` header line.
    MissingHeader,
    /// A year appears twice in one attribute series.
    DuplicateYear(u16),
    /// A value is not a finite, non-negative number.
    InvalidValue { year: u16, region: String, raw: String },
    /// Settings are inconsistent (e.g. an inverted year range).
    InvalidSettings(String),
    /// The base-map GeoJSON could not be used.
    Geometry(String),
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for a missing input file, which callers treat as "no data"
    /// rather than a hard failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "I/O error reading {}: {source}", path.display())
            }
            DataError::Json(e) => write!(f, "JSON error: {e}"),
            DataError::Csv(e) => write!(f, "CSV error: {e}"),
            DataError::MissingHeader => {
                write!(f, "Missing 'Jahr;Monat;...' header in regional averages file")
            }
            DataError::DuplicateYear(year) => write!(f, "Year {year} appears more than once"),
            DataError::InvalidValue { year, region, raw } => {
                write!(f, "Invalid value '{raw}' for {region} in {year}")
            }
            DataError::InvalidSettings(msg) => write!(f, "Invalid settings: {msg}"),
            DataError::Geometry(msg) => write!(f, "Geometry error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io { source, .. } => Some(source),
            DataError::Json(e) => Some(e),
            DataError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Json(e)
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e)
    }
}
