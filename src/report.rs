//! Text rendering of dashboard results.

use crate::models::greeks::GreeksReport;

/// Shown instead of results when any numeric input is missing.
pub const INCOMPLETE_INPUT_MESSAGE: &str = "Please input all values.";

/// Decimal places used for the headline price.
pub const PRICE_DECIMALS: usize = 2;

/// Decimal places used for each Greek.
pub const GREEK_DECIMALS: usize = 4;

/// Price with two decimals, e.g. `10.45`.
pub fn format_price(price: f64) -> String {
    format!("{:.*}", PRICE_DECIMALS, price)
}

/// One `Name: value` line per Greek, four decimals, in report order.
pub fn format_greeks(greeks: &GreeksReport) -> String {
    greeks
        .iter()
        .map(|(key, value)| format!("{}: {:.*}", key, GREEK_DECIMALS, value))
        .collect::<Vec<_>>()
        .join("\n")
}
