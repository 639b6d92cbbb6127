use super::*;

#[test]
fn request_body_carries_operation_and_variables() {
    let body = request_body(&STANDS, &stands_variables("p-1", 3));
    assert_eq!(body["operationName"], "Stands");
    assert_eq!(body["variables"], json!({ "parcelId": "p-1", "pagination": { "page": 3 } }));
    assert!(body["query"].as_str().unwrap().contains("stands(parcelId: $parcelId"));
}

#[test]
fn purchase_variables_list_ids() {
    assert_eq!(purchase_variables(&["a".to_owned(), "b".to_owned()]), json!({ "parcelIds": ["a", "b"] }));
}

#[test]
fn into_data_returns_data_object() {
    let data = into_data(json!({ "data": { "propertyBbox": { "bbox": [1.0, 2.0, 3.0, 4.0] } } })).unwrap();
    let bbox = decode_bbox(&data).unwrap();
    assert_eq!(bbox, Bbox { min_lon: 1.0, min_lat: 2.0, max_lon: 3.0, max_lat: 4.0 });
}

#[test]
fn into_data_surfaces_first_error_code() {
    let err = into_data(json!({
        "data": null,
        "errors": [
            { "message": "not enough credits", "extensions": { "code": "INSUFFICIENT_CREDITS" } },
            { "message": "second" }
        ]
    }))
    .unwrap_err();
    assert_eq!(
        err,
        ApiError::GraphQl { code: "INSUFFICIENT_CREDITS".to_owned(), message: "not enough credits".to_owned() }
    );
}

#[test]
fn into_data_defaults_unknown_code() {
    let err = into_data(json!({ "errors": [{ "message": "boom" }] })).unwrap_err();
    assert_eq!(err.code(), Some("UNKNOWN"));
}

#[test]
fn into_data_rejects_missing_data() {
    assert_eq!(into_data(json!({})).unwrap_err(), ApiError::MissingData("data"));
    assert!(matches!(into_data(json!("oops")), Err(ApiError::Decode(_))));
}

#[test]
fn decode_preview_reads_property() {
    let data = json!({
        "property": {
            "cadastralId": "091-1",
            "parcelId": "p-1",
            "propertyAreaHa": 4.0,
            "forestAreaHa": 3.5,
            "isPurchased": false
        }
    });
    let property = decode_preview(&data).unwrap();
    assert_eq!(property.parcel_id, "p-1");
    assert!(!property.is_purchased);
}

#[test]
fn decode_details_combines_both_root_fields() {
    let data = json!({
        "property": { "cadastralId": "091-1", "parcelId": "p-1", "isPurchased": true, "ccTotalM3": 900.2 },
        "standsByDevelopmentClass": {
            "standsTotalArea": 3.0,
            "standGroups": [
                { "key": "02", "data": [{ "mkStandId": "s1", "mkStandNumber": "1", "standAreaHa": 3.0 }] }
            ]
        }
    });
    let details = decode_details(&data).unwrap();
    assert!(details.property.is_purchased);
    assert_eq!(details.stands_by_development_class.stand_groups.len(), 1);
}

#[test]
fn decode_details_requires_development_classes() {
    let data = json!({ "property": { "cadastralId": "091-1", "parcelId": "p-1" } });
    assert_eq!(decode_details(&data).unwrap_err(), ApiError::MissingData("standsByDevelopmentClass"));
}

#[test]
fn decode_stands_reads_page() {
    let data = json!({
        "stands": {
            "count": 95,
            "pagination": { "limit": 10, "page": 2 },
            "data": [{ "mkStandId": "s1", "mkStandNumber": 11, "standAreaHa": 1.25 }]
        }
    });
    let page = decode_stands(&data).unwrap();
    assert_eq!(page.count, 95);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.data[0].mk_stand_number, "11");
}

#[test]
fn decode_purchase_checks_success_flag() {
    assert!(decode_purchase(&json!({ "scoutPurchase": { "success": true } })).is_ok());
    let err = decode_purchase(&json!({ "scoutPurchase": { "success": false } })).unwrap_err();
    assert_eq!(err.code(), Some("PURCHASE_FAILED"));
}

#[test]
fn decode_field_reports_shape_errors_with_field_name() {
    let err = decode_stands(&json!({ "stands": { "count": "many" } })).unwrap_err();
    match err {
        ApiError::Decode(msg) => assert!(msg.starts_with("stands:")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn details_operation_declares_both_root_fields() {
    assert_eq!(PROPERTY_DETAILS.root_fields, &["property", "standsByDevelopmentClass"]);
    assert!(PROPERTY_PREVIEW.root_fields.contains(&"property"));
}
