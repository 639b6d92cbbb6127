use super::*;

#[test]
fn fixed_rounds_to_requested_decimals() {
    assert_eq!(fixed(Some(10.256), 2), "10.26");
    assert_eq!(fixed(Some(14.26), 1), "14.3");
    assert_eq!(fixed(Some(0.0), 0), "0");
}

#[test]
fn fixed_renders_dash_for_missing_or_nan() {
    assert_eq!(fixed(None, 0), DASH);
    assert_eq!(fixed(Some(f64::NAN), 0), DASH);
}

#[test]
fn category_dash_for_missing_or_blank() {
    assert_eq!(category(Some("MT")), "MT");
    assert_eq!(category(Some("  ")), CATEGORY_DASH);
    assert_eq!(category(None), CATEGORY_DASH);
}

#[test]
fn with_unit_appends_unit() {
    assert_eq!(with_unit(Some(812.4), 0, "tCO2eq"), "812 tCO2eq");
    assert_eq!(with_unit(None, 2, "ha"), "– ha");
}
