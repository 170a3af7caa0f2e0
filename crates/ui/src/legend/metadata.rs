//! Attribute-to-legend mapping.

use climate::attribute::ClimateAttribute;
use climate::classify::buckets;
use rendering::palette::hex_to_egui;

use super::types::LegendEntry;

pub fn legend_title(attribute: ClimateAttribute) -> String {
    format!("{} Legend", attribute.label())
}

/// One entry per bucket, lowest first.
pub fn legend_entries(attribute: ClimateAttribute) -> Vec<LegendEntry> {
    let table = buckets(attribute);
    table
        .iter()
        .enumerate()
        .map(|(idx, bucket)| LegendEntry {
            color: hex_to_egui(bucket.color),
            text: format!(
                "{} ({})",
                bucket.label,
                bucket.range_label(idx + 1 == table.len())
            ),
        })
        .collect()
}
