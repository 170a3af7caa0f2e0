//! Tests for the legend module.

use bevy_egui::egui;
use climate::attribute::ClimateAttribute;

use super::metadata::{legend_entries, legend_title};

fn texts(attribute: ClimateAttribute) -> Vec<String> {
    legend_entries(attribute).into_iter().map(|e| e.text).collect()
}

#[test]
fn titles_name_the_attribute() {
    assert_eq!(legend_title(ClimateAttribute::Temperature), "Temperature Legend");
    assert_eq!(legend_title(ClimateAttribute::Precipitation), "Precipitation Legend");
    assert_eq!(legend_title(ClimateAttribute::Sunshine), "Sunshine Legend");
}

#[test]
fn temperature_rows_match_thresholds() {
    assert_eq!(
        texts(ClimateAttribute::Temperature),
        vec![
            "Cold (0 - 8.5)",
            "Cool (8.5 - 9)",
            "Mild (9 - 9.5)",
            "Warm (9.5 - 10)",
            "Hot (10+)",
        ]
    );
}

#[test]
fn precipitation_rows_match_thresholds() {
    assert_eq!(
        texts(ClimateAttribute::Precipitation),
        vec![
            "Low (0 - 600)",
            "Moderate (600 - 700)",
            "High (700 - 800)",
            "Very High (800 - 1000)",
            "Extreme (1000+)",
        ]
    );
}

#[test]
fn sunshine_rows_match_thresholds() {
    assert_eq!(
        texts(ClimateAttribute::Sunshine),
        vec![
            "Low (0 - 1400)",
            "Moderate (1400 - 1550)",
            "High (1550 - 1700)",
            "Very High (1700 - 1800)",
            "Extreme (1800+)",
        ]
    );
}

#[test]
fn swatches_use_unblended_bucket_colors() {
    let entries = legend_entries(ClimateAttribute::Temperature);
    assert_eq!(entries[0].color, egui::Color32::from_rgb(0x00, 0x00, 0xFF));
    assert_eq!(entries[4].color, egui::Color32::from_rgb(0xFF, 0x00, 0x00));

    let entries = legend_entries(ClimateAttribute::Sunshine);
    assert_eq!(entries[4].color, egui::Color32::from_rgb(0xF5, 0x7C, 0x00));
}

#[test]
fn every_attribute_has_five_rows() {
    for attribute in ClimateAttribute::ALL {
        assert_eq!(legend_entries(attribute).len(), 5, "{attribute:?}");
    }
}
