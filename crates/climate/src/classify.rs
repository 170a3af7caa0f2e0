//! Value-to-color classification for the choropleth fills.
//!
//! Every attribute has an ordered list of half-open buckets `[lower, upper)`.
//! A value on a boundary belongs to the higher bucket. Values outside every
//! bucket (including NaN and negatives) get [`OUT_OF_RANGE`].

use std::fmt;

use crate::attribute::ClimateAttribute;
use crate::dataset::RegionValue;

// =============================================================================
// Colors
// =============================================================================

/// An opaque sRGB color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub u32);

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse `#rrggbb` or `rrggbb` (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }

    pub fn rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00FF_FFFF)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fill for a value that falls outside every bucket.
pub const OUT_OF_RANGE: HexColor = HexColor(0xFF1FBF);

/// Fill when the selected year, or the region within it, has no value.
pub const NO_DATA: HexColor = HexColor(0xFFB74D);

/// Fill for a drawing region that has no dataset name.
pub const UNMAPPED_REGION: HexColor = HexColor(0xCC00B4);

// =============================================================================
// Buckets
// =============================================================================

/// One color class: `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub lower: f64,
    pub upper: f64,
    pub color: HexColor,
    /// Legend wording, e.g. "Cold".
    pub label: &'static str,
}

impl Bucket {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// Range wording for the legend: `"8.5 - 9"`, or `"10+"` for an open-ended
    /// top bucket.
    pub fn range_label(&self, is_last: bool) -> String {
        if is_last {
            format!("{}+", format_bound(self.lower))
        } else {
            format!("{} - {}", format_bound(self.lower), format_bound(self.upper))
        }
    }
}

fn format_bound(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

const fn bucket(lower: f64, upper: f64, color: u32, label: &'static str) -> Bucket {
    Bucket {
        lower,
        upper,
        color: HexColor(color),
        label,
    }
}

static TEMPERATURE_BUCKETS: [Bucket; 5] = [
    bucket(0.0, 8.5, 0x0000FF, "Cold"),
    bucket(8.5, 9.0, 0x00FFFF, "Cool"),
    bucket(9.0, 9.5, 0x00FF00, "Mild"),
    bucket(9.5, 10.0, 0xFFFF00, "Warm"),
    bucket(10.0, 100.0, 0xFF0000, "Hot"),
];

static PRECIPITATION_BUCKETS: [Bucket; 5] = [
    bucket(0.0, 600.0, 0xE5F3FA, "Low"),
    bucket(600.0, 700.0, 0xA1D7F2, "Moderate"),
    bucket(700.0, 800.0, 0x4DB3E6, "High"),
    bucket(800.0, 1000.0, 0x4D7FE6, "Very High"),
    bucket(1000.0, 10000.0, 0x1832F7, "Extreme"),
];

static SUNSHINE_BUCKETS: [Bucket; 5] = [
    bucket(0.0, 1400.0, 0xF6F5D5, "Low"),
    bucket(1400.0, 1550.0, 0xE1DD56, "Moderate"),
    bucket(1550.0, 1700.0, 0xFBF02D, "High"),
    bucket(1700.0, 1800.0, 0xFBC72D, "Very High"),
    bucket(1800.0, 3000.0, 0xF57C00, "Extreme"),
];

/// Buckets for `attribute`, ordered by increasing bounds.
pub fn buckets(attribute: ClimateAttribute) -> &'static [Bucket] {
    match attribute {
        ClimateAttribute::Temperature => &TEMPERATURE_BUCKETS,
        ClimateAttribute::Precipitation => &PRECIPITATION_BUCKETS,
        ClimateAttribute::Sunshine => &SUNSHINE_BUCKETS,
    }
}

/// The bucket holding `value`, if any.
pub fn classify(value: f64, attribute: ClimateAttribute) -> Option<&'static Bucket> {
    buckets(attribute).iter().find(|b| b.contains(value))
}

pub fn color_for_value(value: f64, attribute: ClimateAttribute) -> HexColor {
    classify(value, attribute).map_or(OUT_OF_RANGE, |b| b.color)
}

/// Fill color for a resolved region lookup.
///
/// A region with no column in a year that exists gets [`NO_DATA`] like a
/// missing year, not [`OUT_OF_RANGE`]; the out-of-range color is reserved
/// for real values outside every bucket.
pub fn fill_for(value: RegionValue, attribute: ClimateAttribute) -> HexColor {
    match value {
        RegionValue::Value(v) => color_for_value(v, attribute),
        RegionValue::MissingYear | RegionValue::MissingRegion => NO_DATA,
        RegionValue::UnmappedRegion => UNMAPPED_REGION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_map_to_higher_bucket() {
        for attr in ClimateAttribute::ALL {
            let table = buckets(attr);
            for pair in table.windows(2) {
                let boundary = pair[0].upper;
                assert_eq!(
                    color_for_value(boundary, attr),
                    pair[1].color,
                    "{attr:?} boundary {boundary} should fall in the upper bucket"
                );
            }
            assert_eq!(color_for_value(table[0].lower, attr), table[0].color);
        }
    }

    #[test]
    fn buckets_are_contiguous_and_increasing() {
        for attr in ClimateAttribute::ALL {
            let table = buckets(attr);
            assert_eq!(table.len(), 5);
            for b in table {
                assert!(b.lower < b.upper, "{attr:?} bucket {b:?} is empty");
            }
            for pair in table.windows(2) {
                assert_eq!(pair[0].upper, pair[1].lower, "{attr:?} has a gap");
            }
        }
    }

    #[test]
    fn out_of_range_values_use_fallback() {
        assert_eq!(color_for_value(-0.1, ClimateAttribute::Temperature), OUT_OF_RANGE);
        assert_eq!(color_for_value(100.0, ClimateAttribute::Temperature), OUT_OF_RANGE);
        assert_eq!(color_for_value(10000.0, ClimateAttribute::Precipitation), OUT_OF_RANGE);
        assert_eq!(color_for_value(3000.0, ClimateAttribute::Sunshine), OUT_OF_RANGE);
        assert_eq!(color_for_value(f64::NAN, ClimateAttribute::Sunshine), OUT_OF_RANGE);
    }

    #[test]
    fn typical_values_classify() {
        assert_eq!(
            color_for_value(9.7, ClimateAttribute::Temperature),
            HexColor::parse("#FFFF00").unwrap()
        );
        assert_eq!(
            color_for_value(812.4, ClimateAttribute::Precipitation),
            HexColor::parse("#4D7FE6").unwrap()
        );
        assert_eq!(
            color_for_value(1601.0, ClimateAttribute::Sunshine),
            HexColor::parse("#FBF02D").unwrap()
        );
        assert_eq!(classify(8.49, ClimateAttribute::Temperature).unwrap().label, "Cold");
    }

    #[test]
    fn fallbacks_are_distinct() {
        assert_ne!(OUT_OF_RANGE, NO_DATA);
        assert_ne!(NO_DATA, UNMAPPED_REGION);
        assert_ne!(OUT_OF_RANGE, UNMAPPED_REGION);
        for attr in ClimateAttribute::ALL {
            for b in buckets(attr) {
                assert!(![OUT_OF_RANGE, NO_DATA, UNMAPPED_REGION].contains(&b.color));
            }
        }
    }

    #[test]
    fn fill_for_applies_fallbacks() {
        let attr = ClimateAttribute::Temperature;
        assert_eq!(fill_for(RegionValue::MissingYear, attr), NO_DATA);
        assert_eq!(fill_for(RegionValue::MissingRegion, attr), NO_DATA);
        assert_eq!(fill_for(RegionValue::UnmappedRegion, attr), UNMAPPED_REGION);
        assert_eq!(fill_for(RegionValue::Value(10.2), attr), HexColor(0xFF0000));
    }

    #[test]
    fn range_labels() {
        let t = buckets(ClimateAttribute::Temperature);
        assert_eq!(t[0].range_label(false), "0 - 8.5");
        assert_eq!(t[2].range_label(false), "9 - 9.5");
        assert_eq!(t[4].range_label(true), "10+");
        let p = buckets(ClimateAttribute::Precipitation);
        assert_eq!(p[3].range_label(false), "800 - 1000");
    }

    #[test]
    fn hex_color_parse_and_format() {
        let c = HexColor::parse("#f57c00").unwrap();
        assert_eq!(c.rgb(), [0xF5, 0x7C, 0x00]);
        assert_eq!(c.to_hex(), "#f57c00");
        assert_eq!(HexColor::from_rgb(0xF5, 0x7C, 0x00), c);
        assert!(HexColor::parse("#fff").is_none());
        assert!(HexColor::parse("#gggggg").is_none());
    }

    #[test]
    fn hex_color_rejects_signs_and_whitespace() {
        assert!(HexColor::parse("#+12345").is_none());
        assert!(HexColor::parse("+12345").is_none());
        assert!(HexColor::parse("#-12345").is_none());
        assert!(HexColor::parse("# 12345").is_none());
        assert_eq!(HexColor::parse("012345"), Some(HexColor(0x012345)));
    }
}
