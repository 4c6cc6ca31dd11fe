//! Indian-style currency formatting.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with exactly two decimals and lakh/crore grouping.
///
/// The last three integer digits form one group and every two digits before
/// them form another, so one lakh is `1,00,000.00` and one crore is
/// `1,00,00,000.00`. Amounts are rounded half away from zero.
///
/// # Examples
///
/// ```
/// use esic_calculator::presentation::format_inr;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_inr(Decimal::from(100000)), "1,00,000.00");
/// assert_eq!(format_inr(Decimal::from_str("12345678.9").unwrap()), "1,23,45,678.90");
/// assert_eq!(format_inr(Decimal::from(113)), "113.00");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let text = magnitude.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, group_indian(whole), fraction)
}

/// Inserts lakh/crore separators into a run of integer digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
