//! Shared map viewport state.
//!
//! The map itself renders elsewhere; this model holds the camera, the
//! bounding box of the selected parcel and a one-shot zoom-to-bbox flag.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

use forest::viewport::fit_bbox;
use forest::{Bbox, MapViewport};

#[derive(Clone, Debug, PartialEq)]
pub struct ParcelBbox {
    pub parcel_id: String,
    pub bbox: Bbox,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapViewState {
    pub viewport: MapViewport,
    pub parcel_bbox: Option<ParcelBbox>,
    /// Refit the camera to `parcel_bbox` once it is known.
    pub zoom_to_bbox: bool,
    pub width_px: f64,
    pub height_px: f64,
}

impl Default for MapViewState {
    fn default() -> Self {
        Self {
            viewport: MapViewport::default(),
            parcel_bbox: None,
            zoom_to_bbox: false,
            width_px: 800.0,
            height_px: 600.0,
        }
    }
}

impl MapViewState {
    #[must_use]
    pub fn bbox_for(&self, parcel_id: &str) -> Option<Bbox> {
        self.parcel_bbox
            .as_ref()
            .filter(|entry| entry.parcel_id == parcel_id)
            .map(|entry| entry.bbox)
    }

    pub fn set_parcel_bbox(&mut self, parcel_id: &str, bbox: Bbox) {
        self.parcel_bbox = Some(ParcelBbox { parcel_id: parcel_id.to_owned(), bbox });
    }

    pub fn clear_parcel_bbox(&mut self) {
        self.parcel_bbox = None;
    }

    pub fn request_zoom(&mut self) {
        self.zoom_to_bbox = true;
    }

    pub fn resize(&mut self, width_px: f64, height_px: f64) {
        self.width_px = width_px;
        self.height_px = height_px;
    }

    /// Consume a pending zoom request when a bbox is known.
    ///
    /// Returns `true` when the viewport was refitted.
    pub fn apply_zoom(&mut self, padding_px: f64, max_zoom: f64) -> bool {
        if !self.zoom_to_bbox {
            return false;
        }
        let Some(entry) = &self.parcel_bbox else {
            return false;
        };
        self.viewport = fit_bbox(&entry.bbox, self.width_px, self.height_px, padding_px, max_zoom);
        self.zoom_to_bbox = false;
        true
    }
}
