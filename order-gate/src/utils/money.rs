//! Money formatting
//!
//! Amounts are stored as integer cents and shown in the Chilean style:
//! `$` prefix, `.` thousands separator, `,` decimal separator.

use rust_decimal::prelude::*;

/// Format cents for user-facing messages: 7_000_000 -> "$70.000,00"
pub fn format_price(cents: i64) -> String {
    let amount = Decimal::new(cents, 2)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    let plain = format!("{:.2}", amount);
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}${grouped},{frac_part}")
}
