use bevy::prelude::*;

use climate::settings::AtlasSettings;

pub mod choropleth;
pub mod geometry;
pub mod palette;
pub mod projection;
pub mod raster;
pub mod viewport;

use geometry::RegionGeometry;
use viewport::MapViewports;

/// Where the base map came from, and why it is empty if loading failed.
#[derive(Resource, Debug, Clone, Default)]
pub struct GeometryStatus {
    pub error: Option<String>,
}

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapViewports>()
            .init_resource::<RegionGeometry>()
            .init_resource::<GeometryStatus>()
            .add_systems(Startup, (setup_camera, load_region_geometry));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Startup system: read the base-map GeoJSON named in [`AtlasSettings`].
pub fn load_region_geometry(
    settings: Res<AtlasSettings>,
    mut geometry: ResMut<RegionGeometry>,
    mut status: ResMut<GeometryStatus>,
) {
    let path = &settings.geometry_path;
    match RegionGeometry::load(path) {
        Ok(loaded) => {
            info!(
                "Loaded {} base-map regions from {}",
                loaded.shapes.len(),
                path.display()
            );
            *geometry = loaded;
            status.error = None;
        }
        Err(e) => {
            if e.is_not_found() {
                warn!("Base map not found at {}; maps will be blank", path.display());
            } else {
                error!("Failed to load base map: {e}");
            }
            status.error = Some(e.to_string());
        }
    }
}
