use super::*;

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(95, 10), 10);
    assert_eq!(page_count(100, 10), 10);
    assert_eq!(page_count(101, 10), 11);
    assert_eq!(page_count(0, 10), 0);
}

#[test]
fn page_count_zero_limit_has_no_pages() {
    assert_eq!(page_count(5, 0), 0);
}

#[test]
fn controls_hidden_when_count_fits_one_page() {
    assert!(!shows_controls(10, 10));
    assert!(!shows_controls(3, 10));
    assert!(!shows_controls(0, 10));
    assert!(shows_controls(11, 10));
}

#[test]
fn clamp_page_bounds() {
    assert_eq!(clamp_page(0, 5), 1);
    assert_eq!(clamp_page(9, 5), 5);
    assert_eq!(clamp_page(3, 0), 1);
}

#[test]
fn visible_pages_small_range_has_no_gaps() {
    assert_eq!(
        visible_pages(2, 3, 2),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3)]
    );
}

#[test]
fn visible_pages_inserts_gaps_around_window() {
    assert_eq!(
        visible_pages(5, 10, 1),
        vec![
            PageItem::Page(1),
            PageItem::Gap,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Gap,
            PageItem::Page(10),
        ]
    );
}

#[test]
fn visible_pages_adjacent_edges_skip_gap() {
    assert_eq!(
        visible_pages(3, 5, 1),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3), PageItem::Page(4), PageItem::Page(5)]
    );
    assert!(visible_pages(1, 0, 2).is_empty());
}
