//! Price Parsing
//!
//! Converts currency-formatted strings from the catalogue ("£64.00") into
//! numbers. Parsing never fails: anything unreadable is worth nothing.

use std::sync::LazyLock;

use regex::Regex;

/// Currency symbols stripped before parsing
const CURRENCY_SYMBOLS: &[char] = &['£', '$', '€'];

/// Longest leading decimal number, the way browsers read "64.00/month"
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?").expect("valid number pattern")
});

/// Read the leading number of `text`, if it starts with one.
///
/// The value is returned as written: it may be negative or infinite.
pub(crate) fn leading_number(text: &str) -> Option<f64> {
    let found = LEADING_NUMBER.find(text.trim_start())?;
    found.as_str().parse::<f64>().ok()
}

/// Parse free text as an amount.
///
/// Reads the leading number and ignores trailing text. Empty, unreadable,
/// negative or non-finite input gives `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    match leading_number(text) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Parse an optional price string such as `"£64.00"`.
pub fn parse_price(price: Option<&str>) -> f64 {
    let Some(price) = price else {
        return 0.0;
    };
    let cleaned: String = price
        .chars()
        .filter(|c| !c.is_whitespace() && !CURRENCY_SYMBOLS.contains(c))
        .collect();
    parse_amount(&cleaned)
}

/// Format an amount with two decimals, e.g. `£6.40`
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_strips_symbol_and_spaces() {
        assert_eq!(parse_price(Some("£64.00")), 64.0);
        assert_eq!(parse_price(Some(" £ 1 6.50 ")), 16.5);
        assert_eq!(parse_price(Some("$20")), 20.0);
    }

    #[test]
    fn test_parse_price_degrades_to_zero() {
        assert_eq!(parse_price(None), 0.0);
        assert_eq!(parse_price(Some("")), 0.0);
        assert_eq!(parse_price(Some("free")), 0.0);
        assert_eq!(parse_price(Some("£-5.00")), 0.0);
    }

    #[test]
    fn test_parse_amount_reads_leading_number() {
        assert_eq!(parse_amount("64.00/month"), 64.0);
        assert_eq!(parse_amount("12."), 12.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("1e400"), 0.0);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("£", 6.4), "£6.40");
        assert_eq!(format_money("£", 0.0), "£0.00");
    }
}
