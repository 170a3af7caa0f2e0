use bevy::prelude::*;

pub mod attribute;
pub mod classify;
pub mod dataset;
pub mod error;
pub mod loader;
pub mod region_names;
pub mod settings;

use dataset::ClimateDatasets;
use region_names::RegionNameMap;
use settings::AtlasSettings;

/// Loads the yearly climate series and the region-name table.
///
/// Insert an [`AtlasSettings`] resource before adding the plugin to bypass
/// environment-based configuration (tests do this).
pub struct ClimatePlugin;

impl Plugin for ClimatePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<AtlasSettings>() {
            app.insert_resource(AtlasSettings::from_env());
        }
        app.init_resource::<RegionNameMap>()
            .init_resource::<ClimateDatasets>()
            .add_systems(Startup, load_climate_data);
    }
}

/// Startup system: read every configured series into [`ClimateDatasets`].
pub fn load_climate_data(mut commands: Commands, settings: Res<AtlasSettings>) {
    let datasets = loader::load_datasets(&settings);
    if datasets.is_empty() {
        warn!(
            "No climate data found under {}; every map will show the no-data fill",
            settings.data_dir.display()
        );
    }
    commands.insert_resource(datasets);
}
