//! The two side-by-side choropleth maps.
//!
//! Each half of the central panel shows one year of the selected attribute.
//! Maps pan by dragging and zoom with the scroll wheel around the pointer;
//! each keeps its own viewport. The rasterized map is cached per side and
//! only redrawn when attribute, year, viewport or size change.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use climate::attribute::ClimateAttribute;
use climate::dataset::ClimateDatasets;
use climate::region_names::RegionNameMap;
use climate::settings::GEOMETRY_ENV;
use rendering::choropleth::PaintPlan;
use rendering::geometry::RegionGeometry;
use rendering::raster::rasterize;
use rendering::viewport::{MapViewport, MapViewports};
use rendering::GeometryStatus;

use crate::controls::{ComparisonState, MapSide};
use crate::region_readout::{readout_text, show_readout, HoveredRegion};

// =============================================================================
// Constants
// =============================================================================

/// Zoom levels per point of scroll.
const ZOOM_PER_SCROLL_POINT: f64 = 1.0 / 240.0;

const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

// =============================================================================
// Texture cache
// =============================================================================

/// What a cached map texture was rendered for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapKey {
    pub attribute: ClimateAttribute,
    pub year: u16,
    pub viewport: MapViewport,
    /// Texture size in physical pixels.
    pub size: [usize; 2],
}

struct CachedMap {
    key: MapKey,
    texture: egui::TextureHandle,
    generation: u32,
}

/// Per-side choropleth textures.
#[derive(Resource, Default)]
pub struct ChoroplethTextureCache {
    left: Option<CachedMap>,
    right: Option<CachedMap>,
}

impl ChoroplethTextureCache {
    fn slot(&self, side: MapSide) -> &Option<CachedMap> {
        match side {
            MapSide::Left => &self.left,
            MapSide::Right => &self.right,
        }
    }

    pub fn clear(&mut self) {
        self.left = None;
        self.right = None;
    }

    pub fn key(&self, side: MapSide) -> Option<MapKey> {
        self.slot(side).as_ref().map(|c| c.key)
    }

    /// How many times the side's texture has been redrawn in place.
    pub fn generation(&self, side: MapSide) -> Option<u32> {
        self.slot(side).as_ref().map(|c| c.generation)
    }

    /// Texture for `key`, calling `render` only when the key changed.
    ///
    /// A zero-area key yields `None`; GPU textures cannot have a zero extent.
    pub fn texture_for(
        &mut self,
        ctx: &egui::Context,
        side: MapSide,
        key: MapKey,
        render: impl FnOnce() -> egui::ColorImage,
    ) -> Option<egui::TextureId> {
        if key.size[0] == 0 || key.size[1] == 0 {
            return None;
        }
        let slot = match side {
            MapSide::Left => &mut self.left,
            MapSide::Right => &mut self.right,
        };
        if let Some(cached) = slot {
            if cached.key != key {
                cached.texture.set(render(), egui::TextureOptions::LINEAR);
                cached.key = key;
                cached.generation += 1;
            }
            return Some(cached.texture.id());
        }

        let texture = ctx.load_texture(
            format!("choropleth_{}", side.id()),
            render(),
            egui::TextureOptions::LINEAR,
        );
        let id = texture.id();
        *slot = Some(CachedMap {
            key,
            texture,
            generation: 0,
        });
        Some(id)
    }
}

// =============================================================================
// Systems
// =============================================================================

#[allow(clippy::too_many_arguments)]
pub fn map_panels_ui(
    mut contexts: EguiContexts,
    state: Res<ComparisonState>,
    datasets: Res<ClimateDatasets>,
    names: Res<RegionNameMap>,
    geometry: Res<RegionGeometry>,
    status: Res<GeometryStatus>,
    mut viewports: ResMut<MapViewports>,
    mut hovered: ResMut<HoveredRegion>,
    mut cache: ResMut<ChoroplethTextureCache>,
) {
    if datasets.is_changed() || geometry.is_changed() {
        cache.clear();
    }

    let ctx = contexts.ctx_mut().clone();
    let mut map_rects = Vec::with_capacity(2);
    let mut hover_now = None;

    egui::CentralPanel::default().show(&ctx, |ui| {
        if geometry.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new(missing_geometry_message(status.error.as_deref()))
                        .size(13.0)
                        .color(egui::Color32::from_rgb(150, 60, 40)),
                );
            });
            return;
        }

        ui.columns(2, |columns| {
            for (column, side) in columns.iter_mut().zip(MapSide::ALL) {
                let year = state.year(side);
                column.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(map_heading(&state, side, &datasets))
                            .strong()
                            .size(13.0),
                    );
                });

                let current = match side {
                    MapSide::Left => viewports.left,
                    MapSide::Right => viewports.right,
                };
                let mut viewport = current;
                let view = MapView {
                    side,
                    geometry: &geometry,
                    datasets: &datasets,
                    names: &names,
                    state: &state,
                    year,
                };
                let (rect, hit) = view.show(column, &mut viewport, &mut cache);
                if viewport != current {
                    match side {
                        MapSide::Left => viewports.left = viewport,
                        MapSide::Right => viewports.right = viewport,
                    }
                }

                map_rects.push((side, rect));
                if let Some(hit) = hit {
                    hover_now = hit;
                }
            }
        });
    });

    if hovered.0 != hover_now {
        hovered.0 = hover_now;
    }

    if let Some(name) = &hovered.0 {
        for (side, rect) in map_rects {
            let text = readout_text(state.attribute, state.year(side), name, &datasets, &names);
            show_readout(&ctx, side.id(), rect, name, &text);
        }
    }
}

// =============================================================================
// Map view
// =============================================================================

struct MapView<'a> {
    side: MapSide,
    geometry: &'a RegionGeometry,
    datasets: &'a ClimateDatasets,
    names: &'a RegionNameMap,
    state: &'a ComparisonState,
    year: u16,
}

impl MapView<'_> {
    /// Draw the map and apply pan/zoom. Returns the map rect and, when the
    /// pointer is over the map, the region under it.
    fn show(
        &self,
        ui: &mut egui::Ui,
        viewport: &mut MapViewport,
        cache: &mut ChoroplethTextureCache,
    ) -> (egui::Rect, Option<Option<String>>) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        let screen = [rect.width() as f64, rect.height() as f64];

        if response.dragged() {
            let delta = response.drag_delta();
            viewport.pan_by([delta.x as f64, delta.y as f64]);
        }
        if let Some(pos) = response.hover_pos() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                viewport.zoom_at(
                    scroll as f64 * ZOOM_PER_SCROLL_POINT,
                    local_point(pos, rect),
                    screen,
                );
            }
        }

        let ppp = ui.ctx().pixels_per_point();
        let size = [
            (rect.width() * ppp).round().max(0.0) as usize,
            (rect.height() * ppp).round().max(0.0) as usize,
        ];
        let key = MapKey {
            attribute: self.state.attribute,
            year: self.year,
            viewport: *viewport,
            size,
        };
        let texture = cache.texture_for(ui.ctx(), self.side, key, || {
            let plan = PaintPlan::build(self.state.attribute, self.year, self.datasets, self.names);
            rasterize(self.geometry, &plan, &physical_viewport(viewport, ppp), size)
        });
        if let Some(texture) = texture {
            painter.image(texture, rect, FULL_UV, egui::Color32::WHITE);
        }

        let hit = response.hover_pos().map(|pos| {
            let world = viewport.screen_to_world(local_point(pos, rect), screen);
            self.geometry.region_at(world).map(|shape| shape.name.clone())
        });
        (rect, hit)
    }
}

fn local_point(pos: egui::Pos2, rect: egui::Rect) -> [f64; 2] {
    [(pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64]
}

/// The same view expressed in physical pixels.
fn physical_viewport(viewport: &MapViewport, pixels_per_point: f32) -> MapViewport {
    MapViewport {
        zoom: viewport.zoom + (pixels_per_point as f64).log2(),
        ..*viewport
    }
}

fn map_heading(state: &ComparisonState, side: MapSide, datasets: &ClimateDatasets) -> String {
    let year = state.year(side);
    let attribute = state.attribute;
    if datasets.lookup(attribute, year).is_some() {
        format!("{} ({}) {year}", attribute.label(), attribute.unit())
    } else {
        format!("{} ({}) {year} (no data)", attribute.label(), attribute.unit())
    }
}

fn missing_geometry_message(error: Option<&str>) -> String {
    match error {
        Some(e) => format!(
            "Base map unavailable: {e}\nSet {GEOMETRY_ENV} to a GeoJSON FeatureCollection of the federal states."
        ),
        None => "Base map has no regions to draw.".to_string(),
    }
}
