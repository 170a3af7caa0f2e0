//! Tests for the data loaders.

use std::path::PathBuf;

use super::*;

const DWD_SAMPLE: &str = "Zeitreihen fuer Gebietsmittel fuer Bundeslaender und Deutschland
Jahr;Monat;Brandenburg/Berlin;Brandenburg;Baden-Wuerttemberg;Bayern;Hessen;Mecklenburg-Vorpommern;Niedersachsen;Niedersachsen/Hamburg/Bremen;Nordrhein-Westfalen;Rheinland-Pfalz;Schleswig-Holstein;Saarland;Sachsen;Sachsen-Anhalt;Thueringen/Sachsen-Anhalt;Thueringen;Deutschland;
1999;year;   9.87;   9.86;   9.52;   8.98;   9.78;   9.39;   9.96;   9.97;  10.41;   9.95;   9.53;  10.30;   9.32;   9.84;   9.42;   8.88;   9.55;
2000;year;  10.17;  10.16;   9.91;   9.27;   9.97;   9.62;  10.03;  10.04;  10.44;  10.11;   9.53;  10.44;   9.66;  10.14;   9.77;   9.25;   9.86;
";

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("climate-loader-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn dwd_rows_parse_with_padding_and_trailing_separator() {
    let records = parse_dwd_records(DWD_SAMPLE.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    let y2000 = &records[1];
    assert_eq!(y2000.year, 2000);
    assert_eq!(y2000.value("Brandenburg/Berlin"), Some(10.17));
    assert_eq!(y2000.value("Thueringen"), Some(9.25));
    assert_eq!(y2000.value("Deutschland"), Some(9.86));
    // 17 named region columns; the trailing empty column is dropped.
    assert_eq!(y2000.values.len(), 17);
}

#[test]
fn dwd_latin1_title_line_is_tolerated() {
    let mut bytes = b"Zeitreihen f\xfcr Gebietsmittel\n".to_vec();
    bytes.extend_from_slice(b"Jahr;Monat;Bayern;\n2001;year;  8.10;\n");
    let records = parse_dwd_records(&bytes).unwrap();
    assert_eq!(records[0].value("Bayern"), Some(8.10));
}

#[test]
fn dwd_without_header_is_rejected() {
    let result = parse_dwd_records(b"1999;year;9.1;\n");
    assert!(matches!(result, Err(DataError::MissingHeader)));
}

#[test]
fn dwd_garbage_value_is_rejected() {
    let result = parse_dwd_records(b"Jahr;Monat;Bayern;\n2001;year;abc;\n");
    match result {
        Err(DataError::InvalidValue { year, region, raw }) => {
            assert_eq!(year, 2001);
            assert_eq!(region, "Bayern");
            assert_eq!(raw, "abc");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn json_records_parse() {
    let records =
        parse_json_records(r#"[{"year": 1981, "Bayern": 1710}, {"year": 1982, "Bayern": 1802.5}]"#)
            .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].value("Bayern"), Some(1802.5));
}

#[test]
fn load_series_picks_format_by_extension() {
    let dwd = temp_file("tm.txt", DWD_SAMPLE.as_bytes());
    let series = load_series(ClimateAttribute::Temperature, &dwd).unwrap();
    assert_eq!(series.len(), 2);

    let json = temp_file("rr.json", br#"[{"year": 2003, "Hessen": 540.2}]"#);
    let series = load_series(ClimateAttribute::Precipitation, &json).unwrap();
    assert_eq!(series.record(2003).and_then(|r| r.value("Hessen")), Some(540.2));
}

#[test]
fn load_series_rejects_duplicate_years() {
    let json = temp_file(
        "dup.json",
        br#"[{"year": 2003, "Hessen": 540.2}, {"year": 2003, "Hessen": 541.0}]"#,
    );
    let result = load_series(ClimateAttribute::Precipitation, &json);
    assert!(matches!(result, Err(DataError::DuplicateYear(2003))));
}

#[test]
fn load_datasets_tolerates_missing_files() {
    let dir = temp_file("tm_year.txt", DWD_SAMPLE.as_bytes())
        .parent()
        .unwrap()
        .to_path_buf();
    let settings = AtlasSettings {
        data_dir: dir,
        temperature_file: "tm_year.txt".to_string(),
        precipitation_file: "does_not_exist.txt".to_string(),
        sunshine_file: "does_not_exist_either.json".to_string(),
        first_year: 2000,
        last_year: 2023,
        ..Default::default()
    };
    let datasets = load_datasets(&settings);
    let temperature = datasets.series(ClimateAttribute::Temperature);
    // 1999 is outside the configured range.
    assert_eq!(temperature.years().collect::<Vec<_>>(), vec![2000]);
    assert!(datasets.series(ClimateAttribute::Precipitation).is_empty());
    assert!(datasets.series(ClimateAttribute::Sunshine).is_empty());
}
