//! Web-mercator viewport fitting for framing a parcel's bounding box.
//!
//! Coordinates are projected onto a 512px world at zoom 0, the same tile size
//! the vector map uses, so a zoom level computed here lines up with the map.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::property::Bbox;

const WORLD_SIZE: f64 = 512.0;

/// Map camera position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for MapViewport {
    /// Whole-country view of Finland.
    fn default() -> Self {
        Self { longitude: 25.7, latitude: 64.9, zoom: 4.5 }
    }
}

fn project(lon: f64, lat: f64) -> (f64, f64) {
    let x = WORLD_SIZE * (lon + 180.0) / 360.0;
    let lat_rad = lat.to_radians();
    let y = WORLD_SIZE * (PI - (PI / 4.0 + lat_rad / 2.0).tan().ln()) / (2.0 * PI);
    (x, y)
}

fn unproject(x: f64, y: f64) -> (f64, f64) {
    let lon = x / WORLD_SIZE * 360.0 - 180.0;
    let lat = (2.0 * (PI - 2.0 * PI * y / WORLD_SIZE).exp().atan() - PI / 2.0).to_degrees();
    (lon, lat)
}

/// Viewport that shows `bbox` inside a `width`×`height` pixel map with
/// `padding` pixels kept clear on every side.
///
/// Zoom is capped at `max_zoom`; a degenerate (point) box zooms all the way in.
#[must_use]
pub fn fit_bbox(bbox: &Bbox, width: f64, height: f64, padding: f64, max_zoom: f64) -> MapViewport {
    let (x0, y0) = project(bbox.min_lon, bbox.min_lat);
    let (x1, y1) = project(bbox.max_lon, bbox.max_lat);
    let (center_lon, center_lat) = unproject((x0 + x1) * 0.5, (y0 + y1) * 0.5);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let avail_w = (width - 2.0 * padding).max(1.0);
    let avail_h = (height - 2.0 * padding).max(1.0);

    let zoom = if dx <= f64::EPSILON && dy <= f64::EPSILON {
        max_zoom
    } else {
        let scale_x = if dx > f64::EPSILON { avail_w / dx } else { f64::INFINITY };
        let scale_y = if dy > f64::EPSILON { avail_h / dy } else { f64::INFINITY };
        scale_x.min(scale_y).log2().clamp(0.0, max_zoom)
    };

    MapViewport { longitude: center_lon, latitude: center_lat, zoom }
}
