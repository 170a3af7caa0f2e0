//! Parser for the DWD `regional_averages_*_year.txt` exports.
//!
//! ```text
//! Zeitreihen fuer Gebietsmittel fuer Bundeslaender und Deutschland
//! Jahr;Monat;Brandenburg/Berlin;Brandenburg;Baden-Wuerttemberg;...;Deutschland;
//! 1881;year;   7.52;   7.52;   7.19;...;   7.30;
//! ```
//!
//! The title line may be Latin-1 encoded, so rows are read as bytes.

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::dataset::YearRecord;
use crate::error::DataError;

const YEAR_COLUMN: &str = "Jahr";
/// Columns before the first region (`Jahr`, `Monat`).
const LEADING_COLUMNS: usize = 2;

fn field(record: &ByteRecord, idx: usize) -> String {
    record
        .get(idx)
        .map(|b| String::from_utf8_lossy(b).trim().to_string())
        .unwrap_or_default()
}

pub(crate) fn parse_regional_averages(bytes: &[u8]) -> Result<Vec<YearRecord>, DataError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let mut regions: Option<Vec<String>> = None;
    let mut records = Vec::new();
    let mut row = ByteRecord::new();

    while reader.read_byte_record(&mut row)? {
        let first = field(&row, 0);
        let Some(columns) = regions.as_ref() else {
            if first == YEAR_COLUMN {
                regions = Some(
                    (LEADING_COLUMNS..row.len())
                        .map(|idx| field(&row, idx))
                        .collect(),
                );
            }
            continue;
        };

        if first.is_empty() {
            continue;
        }
        let year: u16 = first.parse().map_err(|_| DataError::InvalidValue {
            year: 0,
            region: YEAR_COLUMN.to_string(),
            raw: first.clone(),
        })?;

        let mut record = YearRecord::new(year);
        for (offset, region) in columns.iter().enumerate() {
            // Trailing separator produces an unnamed, empty column.
            if region.is_empty() {
                continue;
            }
            let raw = field(&row, LEADING_COLUMNS + offset);
            if raw.is_empty() {
                continue;
            }
            let value: f64 = raw.parse().map_err(|_| DataError::InvalidValue {
                year,
                region: region.clone(),
                raw: raw.clone(),
            })?;
            record.values.insert(region.clone(), value);
        }
        records.push(record);
    }

    if regions.is_none() {
        return Err(DataError::MissingHeader);
    }
    Ok(records)
}
