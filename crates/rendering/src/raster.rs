//! CPU rasterization of the choropleth into an egui image.
//!
//! Regions are filled with an even-odd scanline pass (holes and multi-part
//! regions come out right without triangulation), then outlined with 1px
//! clipped line segments.

use bevy_egui::egui;

use crate::choropleth::PaintPlan;
use crate::geometry::RegionGeometry;
use crate::palette::{region_fill, BASE_COLOR, OUTLINE_COLOR};
use crate::viewport::MapViewport;

/// Render `geometry` colored by `plan` as seen through `viewport`.
pub fn rasterize(
    geometry: &RegionGeometry,
    plan: &PaintPlan,
    viewport: &MapViewport,
    size: [usize; 2],
) -> egui::ColorImage {
    let [w, h] = size;
    let mut pixels = vec![BASE_COLOR; w * h];
    if w == 0 || h == 0 {
        return egui::ColorImage { size, pixels };
    }
    let screen = [w as f64, h as f64];

    let mut crossings = Vec::new();
    let mut outlines: Vec<Vec<[f64; 2]>> = Vec::new();

    for shape in &geometry.shapes {
        let min = viewport.world_to_screen(shape.bounds.min, screen);
        let max = viewport.world_to_screen(shape.bounds.max, screen);
        if max[0] < 0.0 || max[1] < 0.0 || min[0] >= screen[0] || min[1] >= screen[1] {
            continue;
        }

        let rings: Vec<Vec<[f64; 2]>> = shape
            .polygons
            .iter()
            .flatten()
            .map(|ring| {
                ring.iter()
                    .map(|&p| viewport.world_to_screen(p, screen))
                    .collect()
            })
            .collect();

        let color = region_fill(plan.fill_for_region(&shape.name));
        let y_start = min[1].max(0.0).floor() as usize;
        let y_end = (max[1].max(0.0).ceil() as usize).min(h);

        for y in y_start..y_end {
            let sy = y as f64 + 0.5;
            crossings.clear();
            for ring in &rings {
                ring_crossings(ring, sy, &mut crossings);
            }
            crossings.sort_by(f64::total_cmp);
            for span in crossings.chunks_exact(2) {
                let x0 = (span[0] - 0.5).ceil().max(0.0) as usize;
                let x1 = ((span[1] - 0.5).ceil().max(0.0) as usize).min(w);
                if x0 < x1 {
                    pixels[y * w + x0..y * w + x1].fill(color);
                }
            }
        }

        outlines.extend(rings);
    }

    for ring in &outlines {
        for pair in ring.windows(2) {
            draw_segment(&mut pixels, size, pair[0], pair[1]);
        }
    }

    egui::ColorImage { size, pixels }
}

/// Push the x positions where `ring` crosses the horizontal line `y`.
fn ring_crossings(ring: &[[f64; 2]], y: f64, out: &mut Vec<f64>) {
    let n = ring.len();
    if n < 3 {
        return;
    }
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > y) != (yj > y) {
            out.push(xj + (y - yj) * (xi - xj) / (yi - yj));
        }
        j = i;
    }
}

/// Liang–Barsky clip of `a→b` to the image rectangle.
fn clip_segment(a: [f64; 2], b: [f64; 2], size: [f64; 2]) -> Option<([f64; 2], [f64; 2])> {
    let d = [b[0] - a[0], b[1] - a[1]];
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    let checks = [
        (-d[0], a[0]),
        (d[0], size[0] - 1.0 - a[0]),
        (-d[1], a[1]),
        (d[1], size[1] - 1.0 - a[1]),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        [a[0] + t0 * d[0], a[1] + t0 * d[1]],
        [a[0] + t1 * d[0], a[1] + t1 * d[1]],
    ))
}

fn draw_segment(pixels: &mut [egui::Color32], size: [usize; 2], a: [f64; 2], b: [f64; 2]) {
    let [w, h] = size;
    let Some((a, b)) = clip_segment(a, b, [w as f64, h as f64]) else {
        return;
    };
    let steps = (b[0] - a[0]).abs().max((b[1] - a[1]).abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = (a[0] + (b[0] - a[0]) * t).round() as usize;
        let y = (a[1] + (b[1] - a[1]) * t).round() as usize;
        if x < w && y < h {
            pixels[y * w + x] = OUTLINE_COLOR;
        }
    }
}
