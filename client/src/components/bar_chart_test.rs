use super::*;

fn datum(label: &str, value: Option<f64>) -> ChartDatum {
    ChartDatum { label: label.to_owned(), value }
}

#[test]
fn widths_are_relative_to_largest_value() {
    let widths = bar_widths(&[datum("Pine", Some(50.0)), datum("Spruce", Some(200.0))]);
    assert_eq!(widths, vec![25.0, 100.0]);
}

#[test]
fn missing_values_draw_no_bar() {
    let widths = bar_widths(&[datum("Pine", None), datum("Spruce", Some(10.0))]);
    assert_eq!(widths, vec![0.0, 100.0]);
}

#[test]
fn all_zero_values_draw_no_bars() {
    assert_eq!(bar_widths(&[datum("Pine", Some(0.0))]), vec![0.0]);
    assert!(bar_widths(&[]).is_empty());
}
