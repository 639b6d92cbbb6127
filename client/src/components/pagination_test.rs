use super::*;

#[test]
fn circles_list_every_page() {
    assert_eq!(
        items_for(PaginationVariant::Circles, 1, 3),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[test]
fn numbered_matches_visible_pages() {
    assert_eq!(items_for(PaginationVariant::Numbered, 5, 20), visible_pages(5, 20, PAGE_RADIUS));
}

#[test]
fn active_class_marks_current_item() {
    assert!(item_class(PaginationVariant::Numbered, true).ends_with("--active"));
    assert!(!item_class(PaginationVariant::Circles, false).contains("--active"));
}
