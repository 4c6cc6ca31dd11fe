//! Display helpers for calculation results.
//!
//! Turns an [`EsicResult`](crate::models::EsicResult) into the strings a
//! form shows: amounts with two decimals in Indian digit grouping, a
//! YES/NO coverage label with its colours, and the blank state a form
//! returns to on reset. Nothing here feeds back into the calculation.

mod currency;
mod display;

pub use currency::format_inr;
pub use display::{
    CoverageStyle, DisplayResult, PLACEHOLDER_AMOUNT, PLACEHOLDER_COVERAGE, coverage_label,
};
