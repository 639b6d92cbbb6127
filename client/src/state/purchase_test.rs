use serde_json::json;

use super::*;
use crate::net::queries::{ORGANIZATION_PROPERTIES, PROFILE, PROPERTY_PREVIEW, parcel_variables};

#[test]
fn open_emits_once() {
    let mut purchase = PurchaseState::default();
    assert_eq!(
        purchase.open("p-1"),
        Some(AnalyticsEvent::PurchaseOpen { parcel_id: "p-1".to_owned() })
    );
    assert_eq!(purchase.open("p-1"), None);
}

#[test]
fn duplicate_submit_is_rejected() {
    let mut purchase = PurchaseState::default();
    purchase.open("p-1");
    assert!(purchase.begin_submit("p-1").is_some());
    assert!(!purchase.can_submit());
    assert_eq!(purchase.begin_submit("p-1"), None);
}

#[test]
fn submit_requires_open_modal() {
    let mut purchase = PurchaseState::default();
    assert_eq!(purchase.begin_submit("p-1"), None);
}

#[test]
fn cancel_is_ignored_while_pending() {
    let mut purchase = PurchaseState::default();
    purchase.open("p-1");
    purchase.begin_submit("p-1");
    assert_eq!(purchase.cancel("p-1"), None);
    assert!(purchase.modal_open);
}

#[test]
fn success_evicts_cache_and_removes_from_basket() {
    let mut purchase = PurchaseState::default();
    let mut cache = QueryCache::default();
    let mut basket = BasketState::default();
    let vars = parcel_variables("p-1");
    cache.insert(&PROPERTY_PREVIEW, &vars, json!({"property": {}}));
    cache.insert(&ORGANIZATION_PROPERTIES, &json!({}), json!({"organizationProperties": []}));
    cache.insert(&PROFILE, &json!({}), json!({"profile": {}}));
    basket.add("p-1");
    basket.add("p-2");

    purchase.open("p-1");
    purchase.begin_submit("p-1");
    let event = purchase.apply_success("p-1", &mut cache, &mut basket);

    assert_eq!(event, AnalyticsEvent::PurchaseSuccess { parcel_id: "p-1".to_owned() });
    assert!(!purchase.modal_open);
    assert!(!purchase.pending);
    assert!(cache.get(&PROPERTY_PREVIEW, &vars).is_none());
    assert_eq!(cache.len(), 1);
    assert!(!basket.contains("p-1"));
    assert!(basket.contains("p-2"));
}

#[test]
fn failure_keeps_modal_open_for_retry() {
    let mut purchase = PurchaseState::default();
    purchase.open("p-1");
    purchase.begin_submit("p-1");
    purchase.apply_failure(ApiError::GraphQl {
        code: "PURCHASE_FAILED".to_owned(),
        message: "nope".to_owned(),
    });
    assert!(purchase.modal_open);
    assert!(purchase.can_submit());
    assert!(purchase.last_error.is_some());
}
