use super::*;

#[test]
fn add_once_contains_exactly_once() {
    let mut basket = BasketState::default();
    basket.add("p-1");
    assert!(basket.contains("p-1"));
    assert_eq!(basket.parcel_ids.iter().filter(|id| *id == "p-1").count(), 1);
}

#[test]
fn add_keeps_insertion_order() {
    let mut basket = BasketState::default();
    basket.add("b");
    basket.add("a");
    assert_eq!(basket.parcel_ids, vec!["b".to_owned(), "a".to_owned()]);
}

#[test]
fn remove_drops_every_occurrence() {
    let mut basket = BasketState::default();
    basket.add("p-1");
    basket.add("p-2");
    basket.add("p-1");
    assert!(basket.remove("p-1"));
    assert_eq!(basket.parcel_ids, vec!["p-2".to_owned()]);
    assert!(!basket.remove("p-1"));
}

#[test]
fn empty_basket_defaults() {
    let basket = BasketState::default();
    assert!(basket.is_empty());
    assert_eq!(basket.len(), 0);
    assert!(!basket.contains("p-1"));
}

#[test]
fn add_from_preview_appends_and_reports() {
    let mut basket = BasketState::default();
    assert_eq!(
        basket.add_from_preview("p-1"),
        Some(AnalyticsEvent::AddToBasket { parcel_id: "p-1".to_owned() })
    );
    assert_eq!(basket.parcel_ids, vec!["p-1".to_owned()]);
}

#[test]
fn add_from_preview_ignores_duplicates() {
    let mut basket = BasketState::default();
    basket.add_from_preview("p-1");
    assert_eq!(basket.add_from_preview("p-1"), None);
    assert_eq!(basket.len(), 1);
}
