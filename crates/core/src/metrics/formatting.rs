use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CRORE, LAKH, THOUSAND};

const FILE_SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats an amount the way the en-IN locale shows currency with no
/// fraction digits, e.g. `₹1,23,457`.
///
/// Rounds half away from zero to the nearest whole unit and groups digits
/// in the Indian lakh/crore pattern. Unknown currency codes are rendered as a
/// code prefix.
pub fn format_currency(amount: Decimal, currency_code: &str) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!(
        "{}{}{}",
        sign,
        currency_prefix(currency_code),
        group_indian(&digits)
    )
}

fn currency_prefix(currency_code: &str) -> String {
    match currency_code.to_ascii_uppercase().as_str() {
        "INR" => "₹".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "JP¥".to_string(),
        other => format!("{}\u{a0}", other),
    }
}

/// Groups a plain digit string as `12,34,56,789`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Abbreviates a number using the crore / lakh / thousand ladder with one
/// decimal place, e.g. `1.3 Cr`, `2.5 L`, `4.2K`. Smaller values are printed
/// as-is.
pub fn format_compact_number(n: Decimal) -> String {
    if n >= CRORE {
        format!("{} Cr", one_decimal(n / CRORE))
    } else if n >= LAKH {
        format!("{} L", one_decimal(n / LAKH))
    } else if n >= THOUSAND {
        format!("{}K", one_decimal(n / THOUSAND))
    } else {
        n.normalize().to_string()
    }
}

/// Exact decimal halves round away from zero: 1150 is `1.2K`, never `1.1K`.
fn one_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}", rounded)
}

/// Human readable file size using a 1024 ladder, e.g. `1.5 KB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, FILE_SIZE_UNITS[unit])
}

/// Long-form en-IN date, e.g. `15 January 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
