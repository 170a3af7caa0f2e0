use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod controls;
pub mod legend;
pub mod map_panels;
pub mod region_readout;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<controls::ComparisonState>()
            .init_resource::<region_readout::HoveredRegion>()
            .init_resource::<map_panels::ChoroplethTextureCache>()
            .add_systems(Startup, theme::apply_atlas_theme)
            .add_systems(
                Update,
                (
                    controls::attribute_keybind,
                    // Side panels must be laid out before the central panel.
                    (
                        controls::controls_ui,
                        legend::legend_ui,
                        map_panels::map_panels_ui,
                    )
                        .chain(),
                ),
            );
    }
}
