//! Display formatting for amounts and results.
//!
//! The exact strings are part of the interchange surface: gram amounts
//! render as a rounded integer, results with exactly two decimals.

/// Render a gram amount with its unit, e.g. `150.0 -> "150 g"`.
#[allow(clippy::cast_possible_truncation)]
pub fn format_grams(grams: f64) -> String {
    format!("{} g", grams.round() as i64)
}

/// Render a deciliter amount with its unit, e.g. `1.5 -> "1.50 dl"`.
pub fn format_deciliters(deciliters: f64) -> String {
    format!("{:.2} dl", deciliters)
}
