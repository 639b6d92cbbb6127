use super::*;

#[test]
fn parcel_events_carry_parcel_id() {
    let event = AnalyticsEvent::AddToBasket { parcel_id: "p-1".to_owned() };
    assert_eq!(event.name(), "Scout Property Preview Add To Basket");
    assert_eq!(event.properties(), json!({ "parcelId": "p-1" }));
}

#[test]
fn pagination_event_carries_page() {
    let event = AnalyticsEvent::PaginationChange { page: 4 };
    assert_eq!(event.properties(), json!({ "page": 4 }));
    assert_eq!(
        event.payload(),
        json!({ "event": "Scout Property Detail Pagination Change", "properties": { "page": 4 } })
    );
}

#[test]
fn event_names_are_distinct() {
    let id = || "p".to_owned();
    let events = [
        AnalyticsEvent::DetailOpen { parcel_id: id() },
        AnalyticsEvent::DetailClose { parcel_id: id() },
        AnalyticsEvent::PreviewOpen { parcel_id: id() },
        AnalyticsEvent::PreviewClose { parcel_id: id() },
        AnalyticsEvent::AddToBasket { parcel_id: id() },
        AnalyticsEvent::PurchaseOpen { parcel_id: id() },
        AnalyticsEvent::PurchaseClose { parcel_id: id() },
        AnalyticsEvent::PurchaseClick { parcel_id: id() },
        AnalyticsEvent::PurchaseSuccess { parcel_id: id() },
        AnalyticsEvent::PaginationChange { page: 1 },
        AnalyticsEvent::ExportCsv { parcel_id: id() },
        AnalyticsEvent::ExportXlsx { parcel_id: id() },
    ];
    let names: std::collections::HashSet<&str> = events.iter().map(AnalyticsEvent::name).collect();
    assert_eq!(names.len(), events.len());
}
