//! Pan/zoom state of one map.

use bevy::prelude::*;

use crate::projection::{project, unproject};

/// Pixel size of the whole world at zoom 0.
pub const TILE_SIZE: f64 = 512.0;

pub const MIN_ZOOM: f64 = 5.0;
pub const MAX_ZOOM: f64 = 15.0;

/// Geographic center of Germany.
pub const DEFAULT_CENTER_LON: f64 = 10.4515;
pub const DEFAULT_CENTER_LAT: f64 = 51.1657;

/// Requested start zoom; raised to [`MIN_ZOOM`] on construction.
pub const INITIAL_ZOOM: f64 = 4.0;

/// Camera of one map: geographic center plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center_lon: f64,
    pub center_lat: f64,
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new(DEFAULT_CENTER_LON, DEFAULT_CENTER_LAT, INITIAL_ZOOM)
    }
}

impl MapViewport {
    pub fn new(center_lon: f64, center_lat: f64, zoom: f64) -> Self {
        Self {
            center_lon,
            center_lat,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// World width/height in pixels at the current zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    fn center_px(&self) -> [f64; 2] {
        let [x, y] = project(self.center_lon, self.center_lat);
        let ws = self.world_size();
        [x * ws, y * ws]
    }

    fn set_center_px(&mut self, px: [f64; 2]) {
        let ws = self.world_size();
        let (lon, lat) = unproject(px[0] / ws, (px[1] / ws).clamp(0.0, 1.0));
        self.center_lon = lon;
        self.center_lat = lat;
    }

    /// Unit world coordinates under a screen point. `screen` is relative to
    /// the map's top-left corner, `size` is the map size in pixels.
    pub fn screen_to_world(&self, screen: [f64; 2], size: [f64; 2]) -> [f64; 2] {
        let [cx, cy] = self.center_px();
        let ws = self.world_size();
        [
            (cx + screen[0] - size[0] / 2.0) / ws,
            (cy + screen[1] - size[1] / 2.0) / ws,
        ]
    }

    pub fn world_to_screen(&self, world: [f64; 2], size: [f64; 2]) -> [f64; 2] {
        let [cx, cy] = self.center_px();
        let ws = self.world_size();
        [
            world[0] * ws - cx + size[0] / 2.0,
            world[1] * ws - cy + size[1] / 2.0,
        ]
    }

    pub fn screen_to_lonlat(&self, screen: [f64; 2], size: [f64; 2]) -> (f64, f64) {
        let [x, y] = self.screen_to_world(screen, size);
        unproject(x, y)
    }

    pub fn lonlat_to_screen(&self, lon: f64, lat: f64, size: [f64; 2]) -> [f64; 2] {
        self.world_to_screen(project(lon, lat), size)
    }

    /// Move the map with the pointer: dragging right reveals the west.
    pub fn pan_by(&mut self, delta: [f64; 2]) {
        let [cx, cy] = self.center_px();
        self.set_center_px([cx - delta[0], cy - delta[1]]);
    }

    /// Change zoom by `delta` levels keeping the point under `anchor` fixed.
    pub fn zoom_at(&mut self, delta: f64, anchor: [f64; 2], size: [f64; 2]) {
        let target = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        if target == self.zoom {
            return;
        }
        let world = self.screen_to_world(anchor, size);
        self.zoom = target;
        let ws = self.world_size();
        self.set_center_px([
            world[0] * ws - (anchor[0] - size[0] / 2.0),
            world[1] * ws - (anchor[1] - size[1] / 2.0),
        ]);
    }
}

/// Independent viewports of the left and right map.
#[derive(Resource, Debug, Clone, Default)]
pub struct MapViewports {
    pub left: MapViewport,
    pub right: MapViewport,
}
