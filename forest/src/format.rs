//! Display formatting for measures that may be missing.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Placeholder for a missing numeric measure.
pub const DASH: &str = "–";

/// Placeholder for a missing category.
pub const CATEGORY_DASH: &str = "-";

/// Format with a fixed number of decimals, or [`DASH`] when missing.
#[must_use]
pub fn fixed(value: Option<f64>, decimals: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{v:.decimals$}"),
        None => DASH.to_owned(),
    }
}

/// Category label or [`CATEGORY_DASH`] when missing or blank.
#[must_use]
pub fn category(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => CATEGORY_DASH.to_owned(),
    }
}

/// `"<value> <unit>"` with [`DASH`] standing in for a missing value.
#[must_use]
pub fn with_unit(value: Option<f64>, decimals: usize, unit: &str) -> String {
    format!("{} {unit}", fixed(value, decimals))
}
