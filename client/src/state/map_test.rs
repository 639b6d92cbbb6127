use super::*;

fn helsinki() -> Bbox {
    Bbox { min_lon: 24.90, min_lat: 60.15, max_lon: 24.98, max_lat: 60.19 }
}

#[test]
fn bbox_is_scoped_to_its_parcel() {
    let mut map = MapViewState::default();
    map.set_parcel_bbox("p-1", helsinki());
    assert_eq!(map.bbox_for("p-1"), Some(helsinki()));
    assert_eq!(map.bbox_for("p-2"), None);
    map.clear_parcel_bbox();
    assert_eq!(map.bbox_for("p-1"), None);
}

#[test]
fn zoom_waits_for_bbox() {
    let mut map = MapViewState::default();
    map.request_zoom();
    assert!(!map.apply_zoom(40.0, 16.0));
    assert!(map.zoom_to_bbox);
    assert_eq!(map.viewport, MapViewport::default());
}

#[test]
fn zoom_refits_once_and_clears_flag() {
    let mut map = MapViewState::default();
    map.set_parcel_bbox("p-1", helsinki());
    map.request_zoom();
    assert!(map.apply_zoom(40.0, 16.0));
    assert!(!map.zoom_to_bbox);
    assert!((map.viewport.longitude - 24.94).abs() < 0.01);
    assert!(map.viewport.zoom > 4.5);
    assert!(map.viewport.zoom <= 16.0);
    assert!(!map.apply_zoom(40.0, 16.0));
}

#[test]
fn no_zoom_without_request() {
    let mut map = MapViewState::default();
    map.set_parcel_bbox("p-1", helsinki());
    assert!(!map.apply_zoom(40.0, 16.0));
}
