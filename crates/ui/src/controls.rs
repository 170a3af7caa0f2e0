//! Page header plus the attribute and year selectors.
//!
//! Both maps share the attribute; each side has its own year. Tab cycles the
//! attribute (Shift+Tab backwards) while no text field has focus.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use climate::attribute::ClimateAttribute;
use climate::settings::AtlasSettings;

pub const TAGLINE: &str = "Dynamic Web for Data visualization Project";
pub const TITLE: &str = "Climate Atlas of Germany";

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(33, 47, 61);

// =============================================================================
// Resources
// =============================================================================

/// Which of the two maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapSide {
    Left,
    Right,
}

impl MapSide {
    pub const ALL: [MapSide; 2] = [MapSide::Left, MapSide::Right];

    pub fn id(self) -> &'static str {
        match self {
            MapSide::Left => "left",
            MapSide::Right => "right",
        }
    }
}

/// Current selections driving both maps.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ComparisonState {
    pub attribute: ClimateAttribute,
    pub left_year: u16,
    pub right_year: u16,
}

impl ComparisonState {
    pub fn from_settings(settings: &AtlasSettings) -> Self {
        Self {
            attribute: ClimateAttribute::default(),
            left_year: settings.default_left_year,
            right_year: settings.default_right_year,
        }
    }

    pub fn year(&self, side: MapSide) -> u16 {
        match side {
            MapSide::Left => self.left_year,
            MapSide::Right => self.right_year,
        }
    }

    pub fn cycle_attribute(&mut self, backwards: bool) {
        self.attribute = if backwards {
            self.attribute.prev()
        } else {
            self.attribute.next()
        };
    }
}

impl FromWorld for ComparisonState {
    fn from_world(world: &mut World) -> Self {
        match world.get_resource::<AtlasSettings>() {
            Some(settings) => Self::from_settings(settings),
            None => Self::from_settings(&AtlasSettings::default()),
        }
    }
}

// =============================================================================
// Systems
// =============================================================================

pub fn attribute_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut state: ResMut<ComparisonState>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Tab) {
        let backwards = keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        state.cycle_attribute(backwards);
    }
}

pub fn controls_ui(
    mut contexts: EguiContexts,
    settings: Res<AtlasSettings>,
    mut state: ResMut<ComparisonState>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("atlas_header")
        .frame(
            egui::Frame::new()
                .fill(HEADER_FILL)
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(TAGLINE.to_uppercase())
                        .size(11.0)
                        .color(egui::Color32::from_rgb(180, 220, 255)),
                );
                ui.label(
                    egui::RichText::new(TITLE)
                        .strong()
                        .size(20.0)
                        .color(egui::Color32::WHITE),
                );
            });
        });

    let mut next = *state;
    egui::TopBottomPanel::top("atlas_controls")
        .frame(
            egui::Frame::new()
                .fill(ctx.style().visuals.panel_fill)
                .inner_margin(egui::Margin::symmetric(16, 8)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Select Attribute").size(13.0));
                egui::ComboBox::from_id_salt("attribute_select")
                    .selected_text(next.attribute.label())
                    .show_ui(ui, |ui| {
                        for attribute in ClimateAttribute::ALL {
                            ui.selectable_value(&mut next.attribute, attribute, attribute.label());
                        }
                    });

                ui.add_space(24.0);
                year_select(ui, "Select Left Year", "left_year_select", &mut next.left_year, &settings);
                ui.add_space(24.0);
                year_select(ui, "Select Right Year", "right_year_select", &mut next.right_year, &settings);
            });
        });

    if next != *state {
        *state = next;
    }
}

fn year_select(ui: &mut egui::Ui, label: &str, id: &str, year: &mut u16, settings: &AtlasSettings) {
    ui.label(egui::RichText::new(label).size(13.0));
    egui::ComboBox::from_id_salt(id)
        .selected_text(year.to_string())
        .height(320.0)
        .show_ui(ui, |ui| {
            for candidate in settings.selectable_years() {
                ui.selectable_value(year, candidate, candidate.to_string());
            }
        });
}
