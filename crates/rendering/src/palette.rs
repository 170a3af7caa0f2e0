//! Color conversions between the classification table, Bevy and egui.

use bevy::prelude::*;
use bevy_egui::egui;

use climate::classify::HexColor;

/// Opacity of region fills over the base map.
pub const FILL_OPACITY: f32 = 0.6;

/// Light land color under the fills.
pub const BASE_COLOR: egui::Color32 = egui::Color32::from_rgb(242, 243, 240);

/// Region outline color.
pub const OUTLINE_COLOR: egui::Color32 = egui::Color32::BLACK;

pub fn hex_to_egui(color: HexColor) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    egui::Color32::from_rgb(r, g, b)
}

pub fn hex_to_bevy(color: HexColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::srgb_u8(r, g, b)
}

/// Convert a Bevy `Color` (sRGBA) to an egui `Color32`.
pub fn bevy_color_to_egui(color: Color) -> egui::Color32 {
    let s = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (s.red * 255.0).round() as u8,
        (s.green * 255.0).round() as u8,
        (s.blue * 255.0).round() as u8,
        (s.alpha * 255.0).round() as u8,
    )
}

/// Blend `tint` over an opaque `base` with the given alpha.
pub fn blend_over(base: egui::Color32, tint: egui::Color32, alpha: f32) -> egui::Color32 {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |b: u8, t: u8| (b as f32 * (1.0 - a) + t as f32 * a).round() as u8;
    egui::Color32::from_rgb(
        mix(base.r(), tint.r()),
        mix(base.g(), tint.g()),
        mix(base.b(), tint.b()),
    )
}

/// Final on-screen color of a region fill.
pub fn region_fill(color: HexColor) -> egui::Color32 {
    blend_over(BASE_COLOR, hex_to_egui(color), FILL_OPACITY)
}
