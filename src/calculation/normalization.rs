//! Input normalization at the calculator boundary.
//!
//! A blank, missing or unreadable amount counts as zero. This is a business
//! rule of the calculator, not a parsing convenience: a form with empty
//! fields is a valid request and must produce a complete result. All
//! coercion happens here, once, before [`compute`](super::compute) runs.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::models::{WageComponent, WageInputs};

/// Largest amount accepted for a single component.
///
/// Anything above this is not a wage and is treated like any other invalid
/// value. It also keeps the thirteen-way sum well inside `Decimal` range.
pub const MAX_COMPONENT_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Normalizes one raw field value to a non-negative amount.
///
/// - `None`, empty or whitespace-only text is zero.
/// - Text that is not a decimal number (plain or scientific notation) is zero.
/// - Negative numbers and amounts above [`MAX_COMPONENT_AMOUNT`] are zero.
///
/// # Examples
///
/// ```
/// use esic_calculator::calculation::normalize_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(normalize_amount(Some("15000.50")), Decimal::from_str("15000.50").unwrap());
/// assert_eq!(normalize_amount(Some(" 2e3 ")), Decimal::from(2000));
/// assert_eq!(normalize_amount(Some("")), Decimal::ZERO);
/// assert_eq!(normalize_amount(Some("abc")), Decimal::ZERO);
/// assert_eq!(normalize_amount(Some("-500")), Decimal::ZERO);
/// assert_eq!(normalize_amount(None), Decimal::ZERO);
/// ```
pub fn normalize_amount(raw: Option<&str>) -> Decimal {
    let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return Decimal::ZERO;
    };

    // `Decimal::from_str` skips `_` separators; a form value never carries them
    let parsed = if text.contains('_') {
        None
    } else {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .ok()
    };

    match parsed {
        Some(amount) => bound_amount(amount),
        None => {
            debug!(value = text, "Non-numeric amount treated as zero");
            Decimal::ZERO
        }
    }
}

/// Normalizes one JSON value the way [`normalize_amount`] normalizes text.
///
/// Numbers and strings go through [`normalize_amount`]; `null`, booleans,
/// arrays and objects are zero.
pub fn normalize_value(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::Null => Decimal::ZERO,
        serde_json::Value::Number(number) => normalize_amount(Some(&number.to_string())),
        serde_json::Value::String(text) => normalize_amount(Some(text)),
        other => {
            debug!(value = %other, "Non-numeric amount treated as zero");
            Decimal::ZERO
        }
    }
}

/// Re-applies the amount bounds to inputs that were built directly.
///
/// Already-normalized inputs come back unchanged. A negative amount or one
/// above [`MAX_COMPONENT_AMOUNT`] becomes zero, so the sums in
/// [`compute`](super::compute) stay inside `Decimal` range.
///
/// # Example
///
/// ```
/// use esic_calculator::calculation::normalize_inputs;
/// use esic_calculator::models::WageInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = normalize_inputs(WageInputs {
///     basic_pay: Decimal::from(-500),
///     hra: Decimal::MAX,
///     bonus: Decimal::from(800),
///     ..WageInputs::default()
/// });
/// assert_eq!(inputs.basic_pay, Decimal::ZERO);
/// assert_eq!(inputs.hra, Decimal::ZERO);
/// assert_eq!(inputs.bonus, Decimal::from(800));
/// ```
pub fn normalize_inputs(inputs: WageInputs) -> WageInputs {
    let mut normalized = inputs;

    for (component, amount) in inputs.components() {
        let bounded = bound_amount(amount);
        if bounded != amount {
            debug!(component = component.label(), "Wage component reset to zero");
            normalized.set_amount(component, bounded);
        }
    }

    normalized
}

/// Zero for negative or out-of-range amounts, the amount otherwise.
fn bound_amount(amount: Decimal) -> Decimal {
    if amount.is_zero() {
        Decimal::ZERO
    } else if amount.is_sign_negative() {
        debug!(value = %amount, "Negative amount treated as zero");
        Decimal::ZERO
    } else if amount > MAX_COMPONENT_AMOUNT {
        debug!(value = %amount, "Out-of-range amount treated as zero");
        Decimal::ZERO
    } else {
        amount
    }
}

/// Builds [`WageInputs`] from `(field name, value)` pairs as a form supplies them.
///
/// Field names are the form names (`basicPay`, `houseValue`, ...) or their
/// snake_case equivalents. Components that never appear stay at zero;
/// unknown names are ignored. When a name appears twice the last value wins.
///
/// # Example
///
/// ```
/// use esic_calculator::calculation::normalize_fields;
/// use rust_decimal::Decimal;
///
/// let inputs = normalize_fields([
///     ("basicPay", Some("10000")),
///     ("hra", Some("")),
///     ("houseValue", None),
/// ]);
/// assert_eq!(inputs.basic_pay, Decimal::from(10000));
/// assert_eq!(inputs.hra, Decimal::ZERO);
/// assert_eq!(inputs.total_gross(), Decimal::from(10000));
/// ```
pub fn normalize_fields<'a, I>(fields: I) -> WageInputs
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut inputs = WageInputs::default();

    for (name, value) in fields {
        match WageComponent::from_field_name(name) {
            Some(component) => inputs.set_amount(component, normalize_amount(value)),
            None => debug!(field = name, "Ignoring unknown wage field"),
        }
    }

    inputs
}
