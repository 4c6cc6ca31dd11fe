//! Rendered result fields and the form reset state.

use serde::{Deserialize, Serialize};

use super::format_inr;
use crate::models::EsicResult;

/// What a monetary output shows before anything is calculated.
pub const PLACEHOLDER_AMOUNT: &str = "0.00";

/// What the coverage output shows before anything is calculated.
pub const PLACEHOLDER_COVERAGE: &str = "-";

/// Maps the coverage flag to its label.
///
/// ```
/// use esic_calculator::presentation::coverage_label;
///
/// assert_eq!(coverage_label(true), "YES");
/// assert_eq!(coverage_label(false), "NO");
/// ```
pub fn coverage_label(is_coverable: bool) -> &'static str {
    if is_coverable { "YES" } else { "NO" }
}

/// Text and background colour for the coverage output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageStyle {
    /// CSS text colour.
    pub color: String,
    /// CSS background colour.
    pub background_color: String,
}

impl CoverageStyle {
    /// Green for coverable, red otherwise.
    pub fn for_coverable(is_coverable: bool) -> Self {
        let (color, background_color) = if is_coverable {
            ("#27ae60", "#e8f6f3")
        } else {
            ("#c0392b", "#fdedec")
        };
        Self {
            color: color.to_string(),
            background_color: background_color.to_string(),
        }
    }

    /// No styling: inherited text colour on a transparent background.
    pub fn neutral() -> Self {
        Self {
            color: "inherit".to_string(),
            background_color: "transparent".to_string(),
        }
    }
}

/// The four outputs as a form displays them.
///
/// # Example
///
/// ```
/// use esic_calculator::calculation::compute;
/// use esic_calculator::models::WageInputs;
/// use esic_calculator::presentation::DisplayResult;
/// use rust_decimal::Decimal;
///
/// let result = compute(WageInputs {
///     basic_pay: Decimal::from(15000),
///     ..WageInputs::default()
/// });
/// let display = DisplayResult::from_result(&result);
///
/// assert_eq!(display.total_gross, "15,000.00");
/// assert_eq!(display.coverable, "YES");
/// assert_eq!(display.employee_contribution, "113.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayResult {
    /// Total gross, formatted.
    pub total_gross: String,
    /// "YES", "NO", or the placeholder after a reset.
    pub coverable: String,
    /// Styling for the coverage output.
    pub coverable_style: CoverageStyle,
    /// Wages for ESI contribution, formatted.
    pub wages_for_esi_contribution: String,
    /// Employee contribution, formatted.
    pub employee_contribution: String,
}

impl DisplayResult {
    /// Renders a computed result.
    pub fn from_result(result: &EsicResult) -> Self {
        Self {
            total_gross: format_inr(result.total_gross),
            coverable: coverage_label(result.is_coverable).to_string(),
            coverable_style: CoverageStyle::for_coverable(result.is_coverable),
            wages_for_esi_contribution: format_inr(result.wages_for_esi_contribution),
            employee_contribution: format_inr(result.employee_contribution),
        }
    }

    /// The blank state a form shows after a reset.
    pub fn reset() -> Self {
        Self {
            total_gross: PLACEHOLDER_AMOUNT.to_string(),
            coverable: PLACEHOLDER_COVERAGE.to_string(),
            coverable_style: CoverageStyle::neutral(),
            wages_for_esi_contribution: PLACEHOLDER_AMOUNT.to_string(),
            employee_contribution: PLACEHOLDER_AMOUNT.to_string(),
        }
    }
}

impl Default for DisplayResult {
    fn default() -> Self {
        Self::reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn result(total_gross: i64, is_coverable: bool, wages: i64, contribution: i64) -> EsicResult {
        EsicResult {
            wage_sum: Decimal::from(wages),
            total_gross: Decimal::from(total_gross),
            is_coverable,
            contribution_basis: Decimal::from(wages),
            wages_for_esi_contribution: Decimal::from(wages),
            employee_contribution: Decimal::from(contribution),
        }
    }

    #[test]
    fn test_coverable_result_renders_yes_in_green() {
        let display = DisplayResult::from_result(&result(42000, true, 21000, 158));

        assert_eq!(display.total_gross, "42,000.00");
        assert_eq!(display.coverable, "YES");
        assert_eq!(display.coverable_style.color, "#27ae60");
        assert_eq!(display.coverable_style.background_color, "#e8f6f3");
        assert_eq!(display.wages_for_esi_contribution, "21,000.00");
        assert_eq!(display.employee_contribution, "158.00");
    }

    #[test]
    fn test_uncoverable_result_renders_no_in_red() {
        let display = DisplayResult::from_result(&result(250000, false, 0, 0));

        assert_eq!(display.total_gross, "2,50,000.00");
        assert_eq!(display.coverable, "NO");
        assert_eq!(display.coverable_style.color, "#c0392b");
        assert_eq!(display.coverable_style.background_color, "#fdedec");
        assert_eq!(display.wages_for_esi_contribution, "0.00");
        assert_eq!(display.employee_contribution, "0.00");
    }

    #[test]
    fn test_reset_shows_placeholders() {
        let display = DisplayResult::reset();

        assert_eq!(display.total_gross, "0.00");
        assert_eq!(display.coverable, "-");
        assert_eq!(display.coverable_style, CoverageStyle::neutral());
        assert_eq!(display.wages_for_esi_contribution, "0.00");
        assert_eq!(display.employee_contribution, "0.00");
    }

    #[test]
    fn test_default_is_reset_state() {
        assert_eq!(DisplayResult::default(), DisplayResult::reset());
    }

    #[test]
    fn test_reset_differs_from_zero_result() {
        // A calculated empty form says "NO"; a reset form says "-".
        let calculated = DisplayResult::from_result(&result(0, false, 0, 0));
        let reset = DisplayResult::reset();

        assert_eq!(calculated.total_gross, reset.total_gross);
        assert_ne!(calculated.coverable, reset.coverable);
        assert_ne!(calculated.coverable_style, reset.coverable_style);
    }
}
