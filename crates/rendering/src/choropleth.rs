//! Per-region fill colors for one (attribute, year) pair.

use climate::attribute::ClimateAttribute;
use climate::classify::{fill_for, HexColor, NO_DATA, UNMAPPED_REGION};
use climate::dataset::ClimateDatasets;
use climate::region_names::RegionNameMap;

/// Fill table for one map: explicit colors for mapped regions, a default for
/// everything else.
///
/// When the year is missing entirely, `fills` is empty and every region gets
/// [`NO_DATA`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaintPlan {
    pub attribute: ClimateAttribute,
    pub year: u16,
    pub fills: Vec<(&'static str, HexColor)>,
    pub default_fill: HexColor,
}

impl PaintPlan {
    pub fn build(
        attribute: ClimateAttribute,
        year: u16,
        datasets: &ClimateDatasets,
        names: &RegionNameMap,
    ) -> Self {
        if datasets.lookup(attribute, year).is_none() {
            return Self {
                attribute,
                year,
                fills: Vec::new(),
                default_fill: NO_DATA,
            };
        }

        let fills = names
            .drawing_names()
            .map(|drawing| {
                let value = datasets.value_for_drawing_region(attribute, year, drawing, names);
                (drawing, fill_for(value, attribute))
            })
            .collect();

        Self {
            attribute,
            year,
            fills,
            default_fill: UNMAPPED_REGION,
        }
    }

    pub fn fill_for_region(&self, drawing_name: &str) -> HexColor {
        self.fills
            .iter()
            .find(|(name, _)| *name == drawing_name)
            .map_or(self.default_fill, |&(_, color)| color)
    }

    pub fn has_data(&self) -> bool {
        !self.fills.is_empty()
    }
}
