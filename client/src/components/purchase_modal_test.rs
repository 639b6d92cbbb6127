use super::*;

#[test]
fn total_area_shows_forest_area() {
    let property = Property {
        parcel_id: "p-1".to_owned(),
        property_area_ha: 14.0,
        forest_area_ha: 10.5,
        ..Property::default()
    };
    let (forest_area, total_area) = area_rows(&property, "ha");
    assert_eq!(forest_area, "10.50 ha");
    assert_eq!(total_area, "10.50 ha");
}
