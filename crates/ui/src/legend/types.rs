//! Types and constants for the legend panel.

use bevy_egui::egui;

// =============================================================================
// Constants
// =============================================================================

/// Radius of the round color swatch.
pub(crate) const SWATCH_RADIUS: f32 = 7.0;
/// Gap after each legend entry.
pub(crate) const ENTRY_SPACING: f32 = 18.0;

// =============================================================================
// Legend rows
// =============================================================================

/// One legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Bucket color as painted on the map, before blending over the base.
    pub color: egui::Color32,
    /// `"Cold (0 - 8.5)"`.
    pub text: String,
}
