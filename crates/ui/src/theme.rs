use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use climate::classify::HexColor;
use rendering::palette::{bevy_color_to_egui, hex_to_egui};

/// Page background behind the egui panels.
pub const PAGE_BACKGROUND: HexColor = HexColor(0xF5F5F2);

/// Light page theme; panel fill follows the window clear color.
pub fn apply_atlas_theme(mut contexts: EguiContexts, clear: Option<Res<ClearColor>>) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = clear.map_or(hex_to_egui(PAGE_BACKGROUND), |c| bevy_color_to_egui(c.0));
    let inactive = egui::Color32::from_rgb(228, 230, 235);
    let hover = egui::Color32::from_rgb(210, 220, 235);
    let active = egui::Color32::from_rgb(51, 102, 153);

    style.visuals.panel_fill = panel;
    style.visuals.window_fill = egui::Color32::WHITE;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    // egui 0.31+ uses CornerRadius with u8 values
    let widget_rounding = egui::CornerRadius::same(4);
    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
