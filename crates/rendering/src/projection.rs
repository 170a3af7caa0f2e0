//! Web-Mercator projection into unit world coordinates.
//!
//! `x` grows eastward from 0 (180°W) to 1 (180°E); `y` grows southward from
//! 0 (north limit) to 1 (south limit).

use std::f64::consts::PI;

/// Latitude limit of the square Web-Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

pub fn project(lon: f64, lat: f64) -> [f64; 2] {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (lon + 180.0) / 360.0;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0;
    [x, y]
}

pub fn unproject(x: f64, y: f64) -> (f64, f64) {
    let lon = x * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * y);
    let lat = n.sinh().atan().to_degrees();
    (lon, lat)
}
