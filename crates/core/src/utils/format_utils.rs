//! Display formatting for amounts, dates, and percentages.

use chrono::NaiveDate;
use num_traits::Zero;
use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Symbol for the common currency codes; anything else falls back to the
/// code itself as a prefix.
fn currency_symbol(currency: &str) -> Option<&'static str> {
    match currency {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        _ => None,
    }
}

/// Formats an amount for display: currency symbol or code, thousands
/// separators, two decimal places. `-1234.5` in USD renders as
/// `-$1,234.50`.
pub fn format_amount(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let magnitude = format!("{:.prec$}", rounded.abs(), prec = DISPLAY_DECIMAL_PRECISION as usize);
    let (whole, fraction) = magnitude.split_once('.').unwrap_or((magnitude.as_str(), ""));
    let grouped = group_thousands(whole);
    match currency_symbol(currency) {
        Some(symbol) => format!("{sign}{symbol}{grouped}.{fraction}"),
        None => format!("{sign}{currency} {grouped}.{fraction}"),
    }
}

/// Formats a calendar date for display, e.g. `Aug 06, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// Formats a percentage with one decimal place, e.g. `60.0%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}%", value)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.891), "USD"), "$1,234,567.89");
        assert_eq!(format_amount(dec!(500), "USD"), "$500.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(dec!(-1234.5), "USD"), "-$1,234.50");
    }

    #[test]
    fn test_format_amount_unknown_code_uses_prefix() {
        assert_eq!(format_amount(dec!(99.9), "CAD"), "CAD 99.90");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert_eq!(format_date(date), "Aug 06, 2026");
    }

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(dec!(60)), "60.0%");
        assert_eq!(format_percent(dec!(33.33)), "33.3%");
    }
}
