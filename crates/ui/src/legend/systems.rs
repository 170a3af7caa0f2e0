//! Legend panel system.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::controls::ComparisonState;

use super::metadata::{legend_entries, legend_title};
use super::types::{ENTRY_SPACING, SWATCH_RADIUS};

// =============================================================================
// Systems
// =============================================================================

pub(crate) fn legend_ui(mut contexts: EguiContexts, state: Res<ComparisonState>) {
    let ctx = contexts.ctx_mut();
    let title = legend_title(state.attribute);
    let entries = legend_entries(state.attribute);

    egui::TopBottomPanel::bottom("atlas_legend")
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .strong()
                    .size(13.0)
                    .color(egui::Color32::BLACK),
            );
            ui.add_space(4.0);

            ui.horizontal_wrapped(|ui| {
                for entry in &entries {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_RADIUS * 2.0, SWATCH_RADIUS * 2.0),
                        egui::Sense::hover(),
                    );
                    ui.painter().circle(
                        rect.center(),
                        SWATCH_RADIUS,
                        entry.color,
                        egui::Stroke::new(1.0, egui::Color32::from_gray(90)),
                    );
                    ui.label(
                        egui::RichText::new(&entry.text)
                            .size(11.0)
                            .color(egui::Color32::from_gray(40)),
                    );
                    ui.add_space(ENTRY_SPACING);
                }
            });
        });
}
