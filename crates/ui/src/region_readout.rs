//! Hover readout shared by both maps.
//!
//! Hovering a region on either map names it on both, each with the value
//! for its own year.

use bevy::prelude::*;
use bevy_egui::egui;

use climate::attribute::ClimateAttribute;
use climate::dataset::ClimateDatasets;
use climate::region_names::RegionNameMap;

/// Drawing-region name under the pointer, on whichever map.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct HoveredRegion(pub Option<String>);

/// `"Temperature: 8.9"`, or `"Temperature: N/A"` when there is no value.
pub fn readout_text(
    attribute: ClimateAttribute,
    year: u16,
    drawing_name: &str,
    datasets: &ClimateDatasets,
    names: &RegionNameMap,
) -> String {
    let value = datasets
        .value_for_drawing_region(attribute, year, drawing_name, names)
        .value();
    match value {
        Some(v) => format!("{}: {v}", attribute.label()),
        None => format!("{}: N/A", attribute.label()),
    }
}

/// White box at the top-center of `map_rect`.
pub fn show_readout(ctx: &egui::Context, id: &str, map_rect: egui::Rect, region: &str, text: &str) {
    egui::Area::new(egui::Id::new(("region_readout", id)))
        .fixed_pos(map_rect.center_top())
        .pivot(egui::Align2::CENTER_TOP)
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .corner_radius(egui::CornerRadius::same(5))
                .inner_margin(egui::Margin::same(10))
                .shadow(egui::Shadow {
                    offset: [0, 0],
                    blur: 5,
                    spread: 0,
                    color: egui::Color32::from_black_alpha(128),
                })
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(region)
                            .strong()
                            .size(13.0)
                            .color(egui::Color32::BLACK),
                    );
                    ui.label(
                        egui::RichText::new(text)
                            .size(12.0)
                            .color(egui::Color32::from_rgb(40, 40, 40)),
                    );
                });
        });
}
