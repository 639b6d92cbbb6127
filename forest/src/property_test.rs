use super::*;
use serde_json::json;

fn stand(number: &str, area: f64) -> Stand {
    Stand { mk_stand_id: format!("id-{number}"), mk_stand_number: number.to_owned(), stand_area_ha: area, ..Stand::default() }
}

#[test]
fn property_deserializes_camel_case_and_missing_volumes() {
    let property: Property = serde_json::from_value(json!({
        "cadastralId": "091-403-0004-0123",
        "parcelId": "p-1",
        "propertyAreaHa": 12.5,
        "forestAreaHa": 10.25,
        "isPurchased": true,
        "ccCarbonTCO2eq": 812.4,
        "ccPineM3": 120.6,
        "ccSpruceM3": null
    }))
    .unwrap();

    assert_eq!(property.cadastral_id, "091-403-0004-0123");
    assert!(property.is_purchased);
    assert_eq!(property.cc_carbon_tco2eq, Some(812.4));
    assert_eq!(property.cc_pine_m3, Some(120.6));
    assert_eq!(property.cc_spruce_m3, None);
    assert_eq!(property.cc_deciduous_m3, None);
}

#[test]
fn stand_accepts_numeric_identifiers_and_classes() {
    let stand: Stand = serde_json::from_value(json!({
        "mkStandId": 129_153,
        "mkStandNumber": 7,
        "standAreaHa": 1.5,
        "mkFertilityClass": 3,
        "ccMeanHeightM": 14.2,
        "ccMainSpecies": "pine",
        "mkDevelopmentClass": "02",
        "ccTotalM3Ha": 150.0
    }))
    .unwrap();

    assert_eq!(stand.mk_stand_id, "129153");
    assert_eq!(stand.mk_stand_number, "7");
    assert_eq!(stand.mk_fertility_class.as_deref(), Some("3"));
    assert_eq!(stand.mk_development_class.as_deref(), Some("02"));
    assert_eq!(stand.cc_pine_fiber_m3_ha, None);
}

#[test]
fn stand_rejects_null_stand_number() {
    let result = serde_json::from_value::<Stand>(json!({ "mkStandId": "a", "mkStandNumber": null }));
    assert!(result.is_err());
}

#[test]
fn bbox_round_trips_through_coordinate_array() {
    let bbox: Bbox = serde_json::from_value(json!([29.58, 63.06, 29.60, 63.07])).unwrap();
    assert_eq!(bbox.min_lon, 29.58);
    assert_eq!(bbox.max_lat, 63.07);
    assert_eq!(serde_json::to_value(bbox).unwrap(), json!([29.58, 63.06, 29.60, 63.07]));
}

#[test]
fn stand_group_unclassified_keys() {
    assert!(StandGroup { key: None, data: vec![] }.is_unclassified());
    assert!(StandGroup { key: Some("null".to_owned()), data: vec![] }.is_unclassified());
    assert!(StandGroup { key: Some("none".to_owned()), data: vec![] }.is_unclassified());
    assert!(!StandGroup { key: Some("03".to_owned()), data: vec![] }.is_unclassified());
}

#[test]
fn stand_page_window_validity() {
    let mut page = StandPage::empty(10);
    assert!(page.is_valid_window());

    page.count = 95;
    page.pagination.page = 10;
    assert!(page.is_valid_window());

    page.pagination.page = 11;
    assert!(!page.is_valid_window());

    page.pagination.page = 0;
    assert!(!page.is_valid_window());
}

#[test]
fn sorted_by_stand_number_is_numeric_with_unparsable_last() {
    let page = StandPage {
        count: 4,
        pagination: Pagination { limit: 10, page: 1 },
        data: vec![stand("10", 1.0), stand("x", 1.0), stand("2", 1.0), stand("1.5", 1.0)],
    };
    let numbers: Vec<&str> = page
        .sorted_by_stand_number()
        .into_iter()
        .map(|s| s.mk_stand_number.as_str())
        .collect();
    assert_eq!(numbers, vec!["1.5", "2", "10", "x"]);
}
