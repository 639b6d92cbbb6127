use super::*;

#[test]
fn exactly_one_slide_is_active() {
    let active = (0..4)
        .filter(|index| slide_class(*index, 3).ends_with("--active"))
        .collect::<Vec<_>>();
    assert_eq!(active, vec![2]);
}

#[test]
fn first_slide_is_active_initially() {
    assert!(slide_class(0, 1).ends_with("--active"));
    assert!(!slide_class(1, 1).ends_with("--active"));
}
